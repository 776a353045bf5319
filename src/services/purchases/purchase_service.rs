//! # 구매 서비스 구현
//!
//! 구매를 검증/저장하고 [`PurchaseCompleted`] 이벤트를 발행합니다.
//! 도서의 `SOLD` 전환은 이벤트 리스너가 비동기로 처리하므로,
//! 구매 직후 도서 상태는 최종적으로만 일관됩니다.
//!
//! ```text
//! create_purchase ─▶ PurchaseStore::save ─▶ EventPublisher::publish ─▶ (반환)
//!                                                   │
//!                                                   ▼
//!                                   UpdateSoldBookListener ─▶ mark_sold
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    core::errors::{AppError, AppResult, ErrorCode},
    domain::{
        entities::purchases::{Purchase, PurchaseOrder},
        events::PurchaseCompleted,
    },
    events::EventPublisher,
    repositories::purchases::PurchaseStore,
    services::{books::BookService, customers::CustomerService},
};

pub struct PurchaseService {
    customers: Arc<CustomerService>,
    books: Arc<BookService>,
    store: Arc<dyn PurchaseStore>,
    publisher: EventPublisher<PurchaseCompleted>,
}

impl PurchaseService {
    pub fn new(
        customers: Arc<CustomerService>,
        books: Arc<BookService>,
        store: Arc<dyn PurchaseStore>,
        publisher: EventPublisher<PurchaseCompleted>,
    ) -> Self {
        Self {
            customers,
            books,
            store,
            publisher,
        }
    }

    /// 구매 생성
    ///
    /// 중복된 도서 ID는 첫 번째만 남깁니다. 이벤트가 큐에 들어가면 바로 반환하며
    /// 판매 정산 완료를 기다리지 않습니다.
    ///
    /// # 에러
    ///
    /// * `NotFound` - `ML-201` (고객 없음), `ML-101` (도서 없음)
    /// * `Unprocessable` - `ML-103`, `ACTIVE`가 아닌 도서 포함
    pub async fn create_purchase(&self, order: PurchaseOrder) -> AppResult<Purchase> {
        let customer = self.customers.get_customer(&order.customer_id).await?;

        let mut seen = HashSet::new();
        let book_ids: Vec<String> = order
            .book_ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();

        let books = self.books.find_all_by_ids(&book_ids).await?;

        let mut price = Decimal::ZERO;
        for id in &book_ids {
            let book = books
                .iter()
                .find(|book| book.id.as_deref() == Some(id.as_str()))
                .ok_or_else(|| AppError::not_found(ErrorCode::ML101, id))?;

            if !book.is_active() {
                return Err(AppError::unprocessable(ErrorCode::ML103, id));
            }
            price += book.price;
        }

        let purchase = self
            .store
            .save(Purchase {
                id: None,
                customer_id: customer.id_str().to_string(),
                book_ids,
                nfe: Some(Uuid::new_v4().to_string()),
                price,
                created_at: Utc::now(),
            })
            .await?;

        self.publisher.publish(PurchaseCompleted {
            purchase_id: purchase.id.clone().unwrap_or_default(),
            customer_id: purchase.customer_id.clone(),
            book_ids: purchase.book_ids.clone(),
        })?;

        log::info!(
            "구매 완료: {} (고객 {}, 도서 {}권, 합계 {})",
            purchase.id.as_deref().unwrap_or_default(),
            purchase.customer_id,
            purchase.book_ids.len(),
            purchase.price
        );
        Ok(purchase)
    }

    /// 고객의 구매 내역 조회
    ///
    /// # 에러
    ///
    /// * `NotFound` - `ML-201`
    pub async fn list_purchases_of(&self, customer_id: &str) -> AppResult<Vec<Purchase>> {
        let customer = self.customers.get_customer(customer_id).await?;
        self.store.find_by_customer(customer.id_str()).await
    }
}
