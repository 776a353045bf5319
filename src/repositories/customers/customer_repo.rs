//! # 고객 리포지토리 구현
//!
//! 고객 엔티티의 MongoDB 데이터 액세스 계층입니다.
//! ID 조회는 Redis 읽기 캐시를 거치며, 캐시는 보조 수단일 뿐 MongoDB가 기준 저장소입니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `customer:{id}`
//! - **TTL**: `CACHE_TTL_SECONDS` (기본 600초)
//! - **값**: [`CachedCustomer`] (비밀번호 해시 제외)
//! - **무효화**: `save`(교체), `update` 직후 해당 키 삭제
//! - **실패 처리**: 캐시 읽기/쓰기 실패는 `warn` 로그만 남기고 MongoDB 결과를 사용
//!
//! 이메일 조회는 사용 가능 여부 판단에 쓰이므로 캐시하지 않습니다.
//! 읽은 값을 `save`로 다시 쓰는 경로는 `find_by_id_uncached`로 MongoDB에서 직접 읽습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};

use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult, ErrorCode},
    db::Database,
    domain::entities::customers::{CachedCustomer, Customer, CustomerDocument, CustomerUpdate},
    repositories::customers::CustomerStore,
    utils::string_utils::escape_regex,
};

const COLLECTION: &str = "customers";
const DUPLICATE_KEY: i32 = 11000;

/// 고객 데이터 액세스 리포지토리 (MongoDB + Redis)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoCustomerRepository::new(database, Some(redis), 600);
/// repo.create_indexes().await?;
///
/// let saved = repo.save(customer).await?;
/// let found = repo.find_by_id(saved.id_str()).await?;   // 캐시 미스 → DB → 캐시 저장
/// let again = repo.find_by_id(saved.id_str()).await?;   // 캐시 히트
/// ```
pub struct MongoCustomerRepository {
    db: Arc<Database>,
    redis: Option<Arc<RedisClient>>,
    cache_ttl_seconds: u64,
}

impl MongoCustomerRepository {
    pub fn new(db: Arc<Database>, redis: Option<Arc<RedisClient>>, cache_ttl_seconds: u64) -> Self {
        Self {
            db,
            redis,
            cache_ttl_seconds,
        }
    }

    fn collection(&self) -> Collection<CustomerDocument> {
        self.db.collection::<CustomerDocument>(COLLECTION)
    }

    fn cache_key(id: &str) -> String {
        format!("customer:{}", id)
    }

    async fn cached(&self, id: &str) -> Option<Customer> {
        let redis = self.redis.as_ref()?;
        match redis.get::<CachedCustomer>(&Self::cache_key(id)).await {
            Ok(found) => found.map(CachedCustomer::into_customer),
            Err(e) => {
                log::warn!("고객 캐시 조회 실패 [{}]: {}", id, e);
                None
            }
        }
    }

    async fn cache(&self, customer: &Customer) {
        let Some(redis) = self.redis.as_ref() else {
            return;
        };
        let value = CachedCustomer::from(customer);
        if let Err(e) = redis
            .set_with_expiry(&Self::cache_key(customer.id_str()), &value, self.cache_ttl_seconds)
            .await
        {
            log::warn!("고객 캐시 저장 실패 [{}]: {}", customer.id_str(), e);
        }
    }

    async fn evict(&self, id: &str) {
        let Some(redis) = self.redis.as_ref() else {
            return;
        };
        if let Err(e) = redis.del(&Self::cache_key(id)).await {
            log::warn!("고객 캐시 무효화 실패 [{}]: {}", id, e);
        }
    }

    async fn find_many(&self, filter: mongodb::bson::Document) -> AppResult<Vec<Customer>> {
        let documents: Vec<CustomerDocument> = self
            .collection()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(Customer::from).collect())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **이메일 유니크 인덱스** - 상태와 무관하게 이메일 중복 방지
    /// 2. **이름 인덱스** - 이름 검색 보조
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().name("name_asc".to_string()).build())
            .build();

        self.collection()
            .create_indexes([email_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// MongoDB 쓰기 에러 중 유니크 인덱스 위반은 `ConflictError`로 변환합니다.
fn map_write_error(error: mongodb::error::Error, email: &str) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *error.kind {
        if write_error.code == DUPLICATE_KEY {
            return AppError::ConflictError(format!("E-mail [{}] already in use", email));
        }
    }
    AppError::DatabaseError(error.to_string())
}

#[async_trait]
impl CustomerStore for MongoCustomerRepository {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        self.find_many(doc! {}).await
    }

    async fn find_by_name_containing(&self, name: &str) -> AppResult<Vec<Customer>> {
        self.find_many(doc! { "name": { "$regex": escape_regex(name) } })
            .await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Customer>> {
        if ObjectId::parse_str(id).is_err() {
            return Ok(None);
        }

        if let Some(cached) = self.cached(id).await {
            return Ok(Some(cached));
        }

        let customer = self.find_by_id_uncached(id).await?;

        if let Some(ref customer) = customer {
            self.cache(customer).await;
        }

        Ok(customer)
    }

    async fn find_by_id_uncached(&self, id: &str) -> AppResult<Option<Customer>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let customer = self
            .collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(Customer::from);

        Ok(customer)
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let count = self
            .collection()
            .count_documents(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = self
            .collection()
            .count_documents(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let customer = self
            .collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(Customer::from);

        Ok(customer)
    }

    async fn save(&self, mut customer: Customer) -> AppResult<Customer> {
        let document = CustomerDocument::from_customer(&customer)?;

        match document.id {
            None => {
                let result = self
                    .collection()
                    .insert_one(&document)
                    .await
                    .map_err(|e| map_write_error(e, &customer.email))?;

                let object_id = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::InternalError("삽입된 고객 ID가 ObjectId가 아닙니다".to_string())
                })?;
                customer.id = Some(object_id.to_hex());
            }
            Some(object_id) => {
                let result = self
                    .collection()
                    .replace_one(doc! { "_id": object_id }, &document)
                    .await
                    .map_err(|e| map_write_error(e, &customer.email))?;

                if result.matched_count == 0 {
                    return Err(AppError::not_found(ErrorCode::ML201, customer.id_str()));
                }
                self.evict(customer.id_str()).await;
            }
        }

        Ok(customer)
    }

    async fn update(&self, update: &CustomerUpdate) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(&update.id) else {
            return Ok(false);
        };

        let result = self
            .collection()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "name": update.name.as_str(), "email": update.email.as_str() } },
            )
            .await
            .map_err(|e| map_write_error(e, &update.email))?;

        if result.matched_count > 0 {
            self.evict(&update.id).await;
        }

        Ok(result.matched_count > 0)
    }
}
