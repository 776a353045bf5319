//! 도서 데이터 액세스 계층
//!
//! [`BookStore`] trait과 MongoDB / 인메모리 구현을 제공합니다.

pub mod book_repo;
pub mod in_memory_book_repo;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::books::{Book, BookStatus};

pub use book_repo::MongoBookRepository;
pub use in_memory_book_repo::InMemoryBookRepository;

/// 도서 저장소 추상화
///
/// ObjectId 형식이 아닌 ID는 존재하지 않는 도서로 취급합니다.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// `id`가 없으면 삽입 후 ID를 할당하고, 있으면 전체 레코드를 교체합니다.
    async fn save(&self, book: Book) -> AppResult<Book>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>>;

    async fn find_by_status(&self, status: BookStatus) -> AppResult<Vec<Book>>;

    /// 주어진 ID 중 존재하는 도서만 반환합니다. 순서는 보장하지 않습니다.
    async fn find_all_by_ids(&self, ids: &[String]) -> AppResult<Vec<Book>>;

    /// 판매자의 도서 중 현재 상태가 `from`인 것만 `to`로 바꾸고, 바뀐 도서 수를 반환합니다.
    ///
    /// 조건 확인과 변경은 한 번의 원자적 쓰기로 수행되므로,
    /// 동시에 다른 상태로 바뀐 도서는 건드리지 않습니다.
    async fn update_status_by_customer(
        &self,
        customer_id: &str,
        from: BookStatus,
        to: BookStatus,
    ) -> AppResult<u64>;

    /// 주어진 ID 전체의 상태를 한 번에 바꾸고, 일치한 도서 수를 반환합니다.
    async fn update_status(&self, ids: &[String], status: BookStatus) -> AppResult<u64>;
}
