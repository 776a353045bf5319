//! # Service Registry - 명시적 의존성 주입
//!
//! 애플리케이션의 모든 서비스와 저장소를 한 곳에서 생성하고 연결합니다.
//! 전역 싱글톤이나 런타임 타입 조회 없이, 생성자에 `Arc<dyn Trait>`을 넘기는
//! 방식으로만 의존성을 주입합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `ApplicationContext` | `ServiceRegistry` | 애플리케이션 당 하나, `web::Data`로 공유 |
//! | `@Autowired` 생성자 | `Service::new(Arc<dyn Trait>, ..)` | 컴파일 타임에 연결 확인 |
//! | `@Profile` | `STORAGE_BACKEND=mongo\|memory` | 저장소 구현 선택 |
//! | `ApplicationEventPublisher` | `EventPublisher<PurchaseCompleted>` | tokio 채널 기반 |
//! | `@PreDestroy` | [`ServiceRegistry::shutdown`] | 남은 이벤트 처리 후 종료 |
//!
//! ## 조립 순서
//!
//! ```text
//! 1. 저장소 (Mongo + Redis 또는 인메모리)
//! 2. BookService                      ← BookStore
//! 3. CustomerService                  ← CustomerStore, BookSettlement(=BookService), PasswordHasher
//! 4. UpdateSoldBookListener           ← BookSettlement(=BookService)
//! 5. EventBus::start                  → EventPublisher, DispatcherHandle
//! 6. PurchaseService                  ← CustomerService, BookService, PurchaseStore, EventPublisher
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let registry = web::Data::new(ServiceRegistry::from_env().await?);
//!
//! HttpServer::new(move || App::new().app_data(registry.clone()))
//!     .bind(("0.0.0.0", 8080))?
//!     .run()
//!     .await?;
//!
//! registry.shutdown().await?;
//! ```

use std::sync::{Arc, Mutex};

use crate::{
    caching::redis::RedisClient,
    config::{CacheConfig, EventConfig, StorageBackend, StorageConfig},
    core::errors::{AppError, AppResult},
    db::Database,
    domain::events::PurchaseCompleted,
    events::{DispatcherHandle, EventBus, EventListener, listeners::UpdateSoldBookListener},
    repositories::{
        books::{BookStore, InMemoryBookRepository, MongoBookRepository},
        customers::{CustomerStore, InMemoryCustomerRepository, MongoCustomerRepository},
        purchases::{InMemoryPurchaseRepository, MongoPurchaseRepository, PurchaseStore},
    },
    services::{
        books::BookService,
        customers::CustomerService,
        purchases::PurchaseService,
        security::{BcryptPasswordHasher, PasswordHasher},
    },
};

/// 애플리케이션 서비스 컨테이너
///
/// tokio 런타임 안에서 생성해야 합니다 (이벤트 디스패처 태스크를 시작합니다).
pub struct ServiceRegistry {
    pub customer_service: Arc<CustomerService>,
    pub book_service: Arc<BookService>,
    pub purchase_service: Arc<PurchaseService>,
    dispatcher: Mutex<Option<DispatcherHandle>>,
}

impl ServiceRegistry {
    /// 인메모리 저장소로 조립합니다. 로컬 실행과 테스트용입니다.
    pub fn in_memory(hasher: Arc<dyn PasswordHasher>, listener_workers: usize) -> Self {
        Self::assemble(
            Arc::new(InMemoryCustomerRepository::new()),
            Arc::new(InMemoryBookRepository::new()),
            Arc::new(InMemoryPurchaseRepository::new()),
            hasher,
            listener_workers,
        )
    }

    /// MongoDB 저장소로 조립하고 인덱스를 생성합니다.
    ///
    /// `redis`가 있으면 고객 ID 조회에 읽기 캐시를 사용합니다.
    pub async fn mongo(
        database: Arc<Database>,
        redis: Option<Arc<RedisClient>>,
        hasher: Arc<dyn PasswordHasher>,
        listener_workers: usize,
    ) -> AppResult<Self> {
        let customers = MongoCustomerRepository::new(database.clone(), redis, CacheConfig::ttl_seconds());
        customers.create_indexes().await?;

        let books = MongoBookRepository::new(database.clone());
        books.create_indexes().await?;

        let purchases = MongoPurchaseRepository::new(database);

        log::info!("✅ MongoDB 저장소 인덱스 준비 완료");

        Ok(Self::assemble(
            Arc::new(customers),
            Arc::new(books),
            Arc::new(purchases),
            hasher,
            listener_workers,
        ))
    }

    /// 환경 변수 설정으로 조립합니다.
    ///
    /// Redis 연결 실패는 치명적이지 않습니다. 경고를 남기고 캐시 없이 계속합니다.
    pub async fn from_env() -> AppResult<Self> {
        let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::from_config());
        let workers = EventConfig::listener_workers();

        match StorageConfig::backend() {
            StorageBackend::Memory => {
                log::warn!("⚠️ 인메모리 저장소 사용 중 - 재시작 시 데이터가 사라집니다");
                Ok(Self::in_memory(hasher, workers))
            }
            StorageBackend::Mongo => {
                let database = Arc::new(Database::new().await?);

                let redis = if CacheConfig::enabled() {
                    match RedisClient::new().await {
                        Ok(client) => Some(Arc::new(client)),
                        Err(e) => {
                            log::warn!("⚠️ Redis 연결 실패, 캐시 없이 계속합니다: {}", e);
                            None
                        }
                    }
                } else {
                    None
                };

                Self::mongo(database, redis, hasher, workers).await
            }
        }
    }

    fn assemble(
        customer_store: Arc<dyn CustomerStore>,
        book_store: Arc<dyn BookStore>,
        purchase_store: Arc<dyn PurchaseStore>,
        hasher: Arc<dyn PasswordHasher>,
        listener_workers: usize,
    ) -> Self {
        let book_service = Arc::new(BookService::new(book_store));
        let customer_service = Arc::new(CustomerService::new(
            customer_store,
            book_service.clone(),
            hasher,
        ));

        let listeners: Vec<Arc<dyn EventListener<PurchaseCompleted>>> =
            vec![Arc::new(UpdateSoldBookListener::new(book_service.clone()))];
        let (publisher, dispatcher) = EventBus::start(listeners, listener_workers);

        let purchase_service = Arc::new(PurchaseService::new(
            customer_service.clone(),
            book_service.clone(),
            purchase_store,
            publisher,
        ));

        Self {
            customer_service,
            book_service,
            purchase_service,
            dispatcher: Mutex::new(Some(dispatcher)),
        }
    }

    /// 이벤트 디스패처를 종료합니다.
    ///
    /// 새 발행은 거부되고, 이미 큐에 있는 이벤트는 모두 처리된 뒤 반환합니다.
    /// 두 번째 호출부터는 아무 일도 하지 않습니다.
    pub async fn shutdown(&self) -> AppResult<()> {
        let dispatcher = self
            .dispatcher
            .lock()
            .map_err(|_| AppError::InternalError("dispatcher lock poisoned".to_string()))?
            .take();

        match dispatcher {
            Some(handle) => handle.shutdown().await,
            None => Ok(()),
        }
    }
}
