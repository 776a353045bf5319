//! 고객 데이터 액세스 계층
//!
//! [`CustomerStore`] trait과 두 가지 구현을 제공합니다.
//!
//! - [`MongoCustomerRepository`] - MongoDB `customers` 컬렉션 + 선택적 Redis 읽기 캐시
//! - [`InMemoryCustomerRepository`] - 프로세스 메모리, 로컬 실행과 테스트용
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::customers::{CustomerStore, InMemoryCustomerRepository};
//!
//! let store: Arc<dyn CustomerStore> = Arc::new(InMemoryCustomerRepository::new());
//! let saved = store.save(customer).await?;
//! let found = store.find_by_id(saved.id_str()).await?;
//! ```

pub mod customer_repo;
pub mod in_memory_customer_repo;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::customers::{Customer, CustomerUpdate};

pub use customer_repo::MongoCustomerRepository;
pub use in_memory_customer_repo::InMemoryCustomerRepository;

/// 고객 저장소 추상화
///
/// ObjectId 형식이 아닌 ID는 존재하지 않는 고객으로 취급합니다.
/// 목록 조회 결과는 저장소의 자연 순서를 따릅니다.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// 상태와 무관하게 모든 고객을 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<Customer>>;

    /// 이름에 `name`을 포함하는 고객을 반환합니다 (대소문자 구분).
    async fn find_by_name_containing(&self, name: &str) -> AppResult<Vec<Customer>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Customer>>;

    /// 캐시를 거치지 않고 기준 저장소에서 읽습니다.
    ///
    /// 조회 결과를 고쳐 [`save`](Self::save)로 다시 쓰는 경로는 이 메서드를 사용합니다.
    async fn find_by_id_uncached(&self, id: &str) -> AppResult<Option<Customer>> {
        self.find_by_id(id).await
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;

    /// 상태와 무관하게 해당 이메일의 고객이 있는지 확인합니다.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>>;

    /// `id`가 없으면 삽입 후 ID를 할당하고, 있으면 전체 레코드를 교체합니다.
    ///
    /// 다른 고객이 이미 사용 중인 이메일이면 `ConflictError`를 반환합니다.
    async fn save(&self, customer: Customer) -> AppResult<Customer>;

    /// 이름과 이메일만 기록합니다. 대상이 없으면 `Ok(false)`.
    async fn update(&self, update: &CustomerUpdate) -> AppResult<bool>;
}
