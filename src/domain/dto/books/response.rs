use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::books::{Book, BookStatus};

/// 도서 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub status: BookStatus,
    pub customer_id: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.unwrap_or_default(),
            name: book.name,
            price: book.price,
            status: book.status,
            customer_id: book.customer_id,
        }
    }
}
