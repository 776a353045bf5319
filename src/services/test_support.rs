//! 서비스 테스트용 기록형 대역(fake)
//!
//! 인메모리 저장소를 감싸 호출 순서를 공유 저널에 기록하고,
//! 실패 스위치로 협력 객체의 에러를 흉내 냅니다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::customers::{Customer, CustomerRegistration, CustomerUpdate};
use crate::repositories::customers::{CustomerStore, InMemoryCustomerRepository};
use crate::services::books::BookSettlement;
use crate::services::security::PasswordHasher;

/// 협력 객체 호출을 순서대로 기록하는 저널
#[derive(Debug, Clone, Default)]
pub struct CallJournal(Arc<Mutex<Vec<String>>>);

impl CallJournal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.entries().iter().filter(|e| e.starts_with(prefix)).count()
    }
}

/// `hashed:<plaintext>`를 돌려주는 결정적 해셔
pub struct FakeHasher;

impl PasswordHasher for FakeHasher {
    fn hash(&self, plaintext: &str) -> AppResult<String> {
        Ok(format!("hashed:{}", plaintext))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool> {
        Ok(hash == format!("hashed:{}", plaintext))
    }
}

/// 항상 실패하는 해셔
pub struct FailingHasher;

impl PasswordHasher for FailingHasher {
    fn hash(&self, _plaintext: &str) -> AppResult<String> {
        Err(AppError::InternalError("hasher unavailable".to_string()))
    }

    fn verify(&self, _plaintext: &str, _hash: &str) -> AppResult<bool> {
        Err(AppError::InternalError("hasher unavailable".to_string()))
    }
}

/// 쓰기 호출(`save`, `update`)을 저널에 남기는 고객 저장소
///
/// [`serve_stale_reads`](Self::serve_stale_reads)로 오래된 캐시 항목을 흉내 낼 수 있습니다.
/// 이때 `find_by_id`는 고정된 사본을 돌려주고, `find_by_id_uncached`만 실제 값을 읽습니다.
pub struct RecordingCustomerStore {
    inner: InMemoryCustomerRepository,
    journal: CallJournal,
    stale: Mutex<Option<Customer>>,
}

impl RecordingCustomerStore {
    pub fn new(journal: CallJournal) -> Self {
        Self {
            inner: InMemoryCustomerRepository::new(),
            journal,
            stale: Mutex::new(None),
        }
    }

    pub fn serve_stale_reads(&self, customer: Customer) {
        *self.stale.lock().unwrap() = Some(customer);
    }

    /// 저널에 남기지 않고 미리 데이터를 넣습니다.
    pub async fn seed(&self, name: &str, email: &str) -> Customer {
        let customer = Customer::register(
            CustomerRegistration {
                name: name.to_string(),
                email: email.to_string(),
                password: String::new(),
            },
            format!("hashed:{}", name.to_lowercase()),
        );
        self.inner.save(customer).await.unwrap()
    }
}

#[async_trait]
impl CustomerStore for RecordingCustomerStore {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        self.inner.find_all().await
    }

    async fn find_by_name_containing(&self, name: &str) -> AppResult<Vec<Customer>> {
        self.inner.find_by_name_containing(name).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Customer>> {
        let stale = self.stale.lock().unwrap().clone();
        if let Some(customer) = stale.filter(|c| c.id_str() == id) {
            return Ok(Some(customer));
        }
        self.inner.find_by_id(id).await
    }

    async fn find_by_id_uncached(&self, id: &str) -> AppResult<Option<Customer>> {
        self.inner.find_by_id_uncached(id).await
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        self.inner.exists_by_id(id).await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.inner.exists_by_email(email).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        self.inner.find_by_email(email).await
    }

    async fn save(&self, customer: Customer) -> AppResult<Customer> {
        self.journal.record(format!(
            "save:{}:{}",
            customer.id.as_deref().unwrap_or("new"),
            customer.status
        ));
        self.inner.save(customer).await
    }

    async fn update(&self, update: &CustomerUpdate) -> AppResult<bool> {
        self.journal.record(format!("update:{}", update.id));
        self.inner.update(update).await
    }
}

/// 호출을 기록하고, 스위치가 켜지면 도서 비활성화를 실패시키는 정산 대역
pub struct RecordingSettlement {
    journal: CallJournal,
    fail_deactivation: AtomicBool,
}

impl RecordingSettlement {
    pub fn new(journal: CallJournal) -> Self {
        Self {
            journal,
            fail_deactivation: AtomicBool::new(false),
        }
    }

    pub fn fail_deactivation(&self) {
        self.fail_deactivation.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BookSettlement for RecordingSettlement {
    async fn deactivate_books_of(&self, customer: &Customer) -> AppResult<()> {
        self.journal
            .record(format!("deactivate:{}", customer.id_str()));

        if self.fail_deactivation.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("books collection unavailable".to_string()));
        }
        Ok(())
    }

    async fn mark_sold(&self, book_ids: &[String]) -> AppResult<()> {
        self.journal.record(format!("mark_sold:{}", book_ids.join(",")));
        Ok(())
    }
}
