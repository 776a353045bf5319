//! # 도서 서비스 구현
//!
//! 도서 등록/조회/취소와, 고객 생명주기 및 구매 정산에서 쓰는
//! [`BookSettlement`] 기능을 제공합니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    core::errors::{AppError, AppResult, ErrorCode},
    domain::entities::{
        books::{Book, BookStatus, NewBook},
        customers::Customer,
    },
    repositories::books::BookStore,
};

/// 도서 정산 기능
///
/// 고객 비활성화 시 도서 정리와 구매 완료 후 판매 처리를 담당합니다.
#[async_trait]
pub trait BookSettlement: Send + Sync {
    /// 고객이 판매 중인(`ACTIVE`) 모든 도서를 `DELETED`로 바꿉니다.
    async fn deactivate_books_of(&self, customer: &Customer) -> AppResult<()>;

    /// 주어진 도서를 모두 `SOLD`로 바꿉니다.
    ///
    /// 멱등적입니다. 이미 `SOLD`인 도서는 그대로 두고 에러도 내지 않습니다.
    async fn mark_sold(&self, book_ids: &[String]) -> AppResult<()>;
}

pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// 도서 등록. 소유 고객의 존재 확인은 호출자가 먼저 수행합니다.
    pub async fn create_book(&self, new_book: NewBook) -> AppResult<Book> {
        let saved = self.store.save(Book::new(new_book)).await?;

        log::info!("도서 등록: {} (판매자 {})", saved.id_str(), saved.customer_id);
        Ok(saved)
    }

    /// # 에러
    ///
    /// * `NotFound` - `ML-101`, `"Book [<id>] not exists"`
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ErrorCode::ML101, id))
    }

    pub async fn list_active_books(&self) -> AppResult<Vec<Book>> {
        self.store.find_by_status(BookStatus::Active).await
    }

    pub async fn find_all_by_ids(&self, ids: &[String]) -> AppResult<Vec<Book>> {
        self.store.find_all_by_ids(ids).await
    }

    /// 판매 취소
    ///
    /// `ACTIVE` 도서만 `CANCELLED`로 바꿀 수 있습니다.
    ///
    /// # 에러
    ///
    /// * `NotFound` - `ML-101`
    /// * `Unprocessable` - `ML-102`, `"Cannot update book with status [<STATUS>]"`
    pub async fn cancel_book(&self, id: &str) -> AppResult<()> {
        let mut book = self.get_book(id).await?;

        if !book.is_active() {
            return Err(AppError::unprocessable(ErrorCode::ML102, book.status));
        }

        book.status = BookStatus::Cancelled;
        self.store.save(book).await?;

        log::info!("도서 판매 취소: {}", id);
        Ok(())
    }
}

#[async_trait]
impl BookSettlement for BookService {
    async fn deactivate_books_of(&self, customer: &Customer) -> AppResult<()> {
        // ACTIVE 조건 확인과 상태 변경은 한 번의 쓰기로 수행
        let updated = self
            .store
            .update_status_by_customer(customer.id_str(), BookStatus::Active, BookStatus::Deleted)
            .await?;

        if updated > 0 {
            log::info!("고객 {}의 도서 {}권 삭제 처리", customer.id_str(), updated);
        }
        Ok(())
    }

    async fn mark_sold(&self, book_ids: &[String]) -> AppResult<()> {
        if book_ids.is_empty() {
            return Ok(());
        }

        let updated = self.store.update_status(book_ids, BookStatus::Sold).await?;
        log::info!("도서 {}권 판매 완료 처리", updated);
        Ok(())
    }
}
