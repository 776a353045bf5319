//! # 고객 관리 서비스 구현
//!
//! 고객 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직입니다.
//!
//! ## 상태 머신
//!
//! ```text
//! ┌────────┐   delete_customer   ┌──────────┐
//! │ ACTIVE │ ──────────────────▶ │ INACTIVE │ (종료 상태)
//! └────────┘                     └──────────┘
//! ```
//!
//! - 상태는 `delete_customer`로만 바뀝니다.
//! - 비밀번호 해시는 생성 시 한 번만 만들어지고 수정 경로에서는 다시 계산하지 않습니다.
//! - 수정은 이름과 이메일만 기록합니다.
//!
//! ## 협력 객체
//!
//! ```text
//!                 ┌──────────────────┐
//!                 │ CustomerService  │
//!                 └────────┬─────────┘
//!        ┌─────────────────┼──────────────────┐
//!        ▼                 ▼                  ▼
//! ┌──────────────┐ ┌────────────────┐ ┌────────────────┐
//! │CustomerStore │ │ BookSettlement │ │ PasswordHasher │
//! └──────────────┘ └────────────────┘ └────────────────┘
//! ```

use std::sync::Arc;

use crate::{
    core::errors::{AppError, AppResult, ErrorCode},
    domain::entities::customers::{Customer, CustomerRegistration, CustomerUpdate},
    repositories::customers::CustomerStore,
    services::{books::BookSettlement, security::PasswordHasher},
};

/// 고객 관리 비즈니스 로직 서비스
///
/// 모든 작업은 호출자의 태스크에서 실행되며 자체적인 동시성을 만들지 않습니다.
/// `NotFound`(`ML-201`)만 이 서비스에서 직접 만들고,
/// 저장소/해싱/정산 에러는 가공하지 않고 그대로 전파합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = CustomerService::new(store, book_service, hasher);
///
/// service.create_customer(CustomerRegistration {
///     name: "Maicon".to_string(),
///     email: "maicon@bookstore.dev".to_string(),
///     password: "s3cret".to_string(),
/// }).await?;
///
/// let found = service.list_customers(Some("Ma")).await?;
/// service.delete_customer(found[0].id_str()).await?;
/// ```
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
    settlement: Arc<dyn BookSettlement>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CustomerService {
    pub fn new(
        store: Arc<dyn CustomerStore>,
        settlement: Arc<dyn BookSettlement>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            store,
            settlement,
            hasher,
        }
    }

    /// 고객 목록 조회
    ///
    /// 이름 필터가 있고 비어 있지 않으면 이름 부분 일치(대소문자 구분) 검색,
    /// 아니면 비활성 고객을 포함한 전체 목록을 반환합니다.
    pub async fn list_customers(&self, name_filter: Option<&str>) -> AppResult<Vec<Customer>> {
        match name_filter {
            Some(name) if !name.is_empty() => self.store.find_by_name_containing(name).await,
            _ => self.store.find_all().await,
        }
    }

    /// 새 고객 생성
    ///
    /// 역할은 `{CUSTOMER}`, 상태는 `ACTIVE`로 고정되고
    /// 평문 비밀번호는 해시로 대체된 뒤 저장됩니다.
    ///
    /// # 에러
    ///
    /// * `InternalError` - 해싱 실패 (저장은 일어나지 않음)
    /// * `ConflictError` / `DatabaseError` - 저장소 오류
    pub async fn create_customer(&self, registration: CustomerRegistration) -> AppResult<()> {
        let password_hash = self.hasher.hash(&registration.password)?;
        let customer = Customer::register(registration, password_hash);

        let saved = self.store.save(customer).await?;

        log::info!("고객 생성: {} ({})", saved.id_str(), saved.email);
        Ok(())
    }

    /// ID로 고객 조회
    ///
    /// # 에러
    ///
    /// * `NotFound` - `ML-201`, `"Customer [<id>] not exists"`
    pub async fn get_customer(&self, id: &str) -> AppResult<Customer> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ErrorCode::ML201, id))
    }

    /// 고객 이름과 이메일 수정
    ///
    /// 존재 여부를 먼저 확인하므로, 없는 ID면 쓰기가 한 번도 일어나지 않습니다.
    pub async fn update_customer(&self, update: CustomerUpdate) -> AppResult<()> {
        if !self.store.exists_by_id(&update.id).await? {
            return Err(AppError::not_found(ErrorCode::ML201, &update.id));
        }

        if !self.store.update(&update).await? {
            // exists_by_id와 update 사이에 삭제된 경우
            return Err(AppError::not_found(ErrorCode::ML201, &update.id));
        }

        log::info!("고객 수정: {}", update.id);
        Ok(())
    }

    /// 고객 비활성화 (soft delete)
    ///
    /// 다음 순서를 엄격히 지킵니다.
    ///
    /// 1. 고객 조회 (`ML-201` 전파)
    /// 2. 고객이 판매 중인 도서 비활성화
    /// 3. 상태를 `INACTIVE`로 변경
    /// 4. 저장
    ///
    /// 2단계가 실패하면 3, 4단계는 실행되지 않고 에러가 그대로 전파됩니다.
    /// 4단계는 전체 레코드를 교체하므로 1단계는 캐시를 거치지 않고 읽습니다.
    pub async fn delete_customer(&self, id: &str) -> AppResult<()> {
        let mut customer = self
            .store
            .find_by_id_uncached(id)
            .await?
            .ok_or_else(|| AppError::not_found(ErrorCode::ML201, id))?;

        self.settlement.deactivate_books_of(&customer).await?;

        customer.deactivate();
        self.store.save(customer).await?;

        log::info!("고객 비활성화: {}", id);
        Ok(())
    }

    /// 이메일 사용 가능 여부
    ///
    /// 상태와 무관하게 같은 이메일의 고객이 있으면 사용할 수 없습니다.
    pub async fn is_email_available(&self, email: &str) -> AppResult<bool> {
        Ok(!self.store.exists_by_email(email).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::entities::customers::{CachedCustomer, Role, Status};
    use crate::services::test_support::{
        CallJournal, FailingHasher, FakeHasher, RecordingCustomerStore, RecordingSettlement,
    };

    struct Fixture {
        service: CustomerService,
        store: Arc<RecordingCustomerStore>,
        settlement: Arc<RecordingSettlement>,
        journal: CallJournal,
    }

    fn fixture() -> Fixture {
        fixture_with_hasher(Arc::new(FakeHasher))
    }

    fn fixture_with_hasher(hasher: Arc<dyn PasswordHasher>) -> Fixture {
        let journal = CallJournal::default();
        let store = Arc::new(RecordingCustomerStore::new(journal.clone()));
        let settlement = Arc::new(RecordingSettlement::new(journal.clone()));
        let service = CustomerService::new(store.clone(), settlement.clone(), hasher);

        Fixture {
            service,
            store,
            settlement,
            journal,
        }
    }

    fn registration(name: &str, email: &str) -> CustomerRegistration {
        CustomerRegistration {
            name: name.to_string(),
            email: email.to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_customers_by_name_filter() {
        let f = fixture();
        f.store.seed("Maicon", "maicon@bookstore.dev").await;
        f.store.seed("Duda", "duda@bookstore.dev").await;
        f.store.seed("Carol", "carol@bookstore.dev").await;

        let filtered = f.service.list_customers(Some("Ma")).await.unwrap();
        let names: Vec<_> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Maicon"]);

        let all = f.service.list_customers(None).await.unwrap();
        assert_eq!(all.len(), 3);

        let empty_filter = f.service.list_customers(Some("")).await.unwrap();
        assert_eq!(empty_filter.len(), 3);
    }

    #[tokio::test]
    async fn test_list_customers_includes_inactive() {
        let f = fixture();
        let maicon = f.store.seed("Maicon", "maicon@bookstore.dev").await;
        f.store.seed("Duda", "duda@bookstore.dev").await;
        f.service.delete_customer(maicon.id_str()).await.unwrap();

        let all = f.service.list_customers(None).await.unwrap();

        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|c| c.status == Status::Inactive));
    }

    #[tokio::test]
    async fn test_create_customer_forces_role_and_hashes_password() {
        let f = fixture();

        f.service
            .create_customer(registration("Maicon", "maicon@bookstore.dev"))
            .await
            .unwrap();

        let stored = f.service.list_customers(None).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].roles, BTreeSet::from([Role::Customer]));
        assert_eq!(stored[0].status, Status::Active);
        assert_eq!(stored[0].password, "hashed:s3cret");
        assert_eq!(f.journal.entries(), vec!["save:new:ACTIVE".to_string()]);
    }

    #[tokio::test]
    async fn test_create_customer_hash_failure_skips_save() {
        let f = fixture_with_hasher(Arc::new(FailingHasher));

        let result = f
            .service
            .create_customer(registration("Maicon", "maicon@bookstore.dev"))
            .await;

        assert!(matches!(result, Err(AppError::InternalError(_))));
        assert!(f.journal.entries().is_empty());
    }

    #[tokio::test]
    async fn test_get_customer_unknown_id() {
        let f = fixture();

        let error = f.service.get_customer("507f1f77bcf86cd799439011").await.unwrap_err();

        assert_eq!(error.code(), Some("ML-201"));
        assert_eq!(error.to_string(), "Customer [507f1f77bcf86cd799439011] not exists");
    }

    #[tokio::test]
    async fn test_get_customer_malformed_id_is_not_found() {
        let f = fixture();

        let error = f.service.get_customer("abc").await.unwrap_err();

        assert_eq!(error.to_string(), "Customer [abc] not exists");
    }

    #[tokio::test]
    async fn test_update_customer_unknown_id_writes_nothing() {
        let f = fixture();

        let error = f
            .service
            .update_customer(CustomerUpdate {
                id: "507f1f77bcf86cd799439011".to_string(),
                name: "Nobody".to_string(),
                email: "nobody@bookstore.dev".to_string(),
            })
            .await
            .unwrap_err();

        assert!(error.is_not_found());
        assert!(f.journal.entries().is_empty());
    }

    #[tokio::test]
    async fn test_update_customer_writes_once_with_given_values() {
        let f = fixture();
        let maicon = f.store.seed("Maicon", "maicon@bookstore.dev").await;

        f.service
            .update_customer(CustomerUpdate {
                id: maicon.id.clone().unwrap(),
                name: "Maicon Silva".to_string(),
                email: "silva@bookstore.dev".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(f.journal.entries(), vec![format!("update:{}", maicon.id_str())]);

        let stored = f.service.get_customer(maicon.id_str()).await.unwrap();
        assert_eq!(stored.name, "Maicon Silva");
        assert_eq!(stored.email, "silva@bookstore.dev");
        assert_eq!(stored.password, maicon.password);
        assert_eq!(stored.status, Status::Active);
    }

    #[tokio::test]
    async fn test_delete_customer_deactivates_books_then_saves_inactive() {
        let f = fixture();
        let maicon = f.store.seed("Maicon", "maicon@bookstore.dev").await;

        f.service.delete_customer(maicon.id_str()).await.unwrap();

        assert_eq!(
            f.journal.entries(),
            vec![
                format!("deactivate:{}", maicon.id_str()),
                format!("save:{}:INACTIVE", maicon.id_str()),
            ]
        );
        let stored = f.service.get_customer(maicon.id_str()).await.unwrap();
        assert_eq!(stored.status, Status::Inactive);
    }

    #[tokio::test]
    async fn test_delete_customer_keeps_update_hidden_by_stale_cache() {
        let f = fixture();
        let maicon = f.store.seed("Maicon", "maicon@bookstore.dev").await;
        f.store
            .serve_stale_reads(CachedCustomer::from(&maicon).into_customer());

        f.service
            .update_customer(CustomerUpdate {
                id: maicon.id.clone().unwrap(),
                name: "Maicon Silva".to_string(),
                email: "silva@bookstore.dev".to_string(),
            })
            .await
            .unwrap();
        f.service.delete_customer(maicon.id_str()).await.unwrap();

        let stored = f
            .store
            .find_by_id_uncached(maicon.id_str())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Maicon Silva");
        assert_eq!(stored.email, "silva@bookstore.dev");
        assert_eq!(stored.password, maicon.password);
        assert_eq!(stored.status, Status::Inactive);
    }

    #[tokio::test]
    async fn test_delete_customer_settlement_failure_skips_save() {
        let f = fixture();
        let maicon = f.store.seed("Maicon", "maicon@bookstore.dev").await;
        f.settlement.fail_deactivation();

        let result = f.service.delete_customer(maicon.id_str()).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert_eq!(f.journal.count_prefix("deactivate:"), 1);
        assert_eq!(f.journal.count_prefix("save:"), 0);

        let stored = f.service.get_customer(maicon.id_str()).await.unwrap();
        assert_eq!(stored.status, Status::Active);
    }

    #[tokio::test]
    async fn test_delete_customer_unknown_id() {
        let f = fixture();

        let error = f
            .service
            .delete_customer("507f1f77bcf86cd799439011")
            .await
            .unwrap_err();

        assert_eq!(error.code(), Some("ML-201"));
        assert!(f.journal.entries().is_empty());
    }

    #[tokio::test]
    async fn test_is_email_available_counts_inactive_customers() {
        let f = fixture();
        let maicon = f.store.seed("Maicon", "maicon@bookstore.dev").await;
        f.service.delete_customer(maicon.id_str()).await.unwrap();

        assert!(!f.service.is_email_available("maicon@bookstore.dev").await.unwrap());
        assert!(f.service.is_email_available("duda@bookstore.dev").await.unwrap());
    }
}
