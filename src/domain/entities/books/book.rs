//! Book Entity Implementation
//!
//! 고객이 판매 등록한 도서입니다. 상태는 `BookSettlement` 호출이나 판매 취소로만 바뀝니다.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult, ErrorCode};

/// 도서 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookStatus {
    /// 판매 중
    Active,
    /// 구매 완료
    Sold,
    /// 판매자가 취소
    Cancelled,
    /// 판매자 계정 비활성화로 삭제
    Deleted,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookStatus::Active => "ACTIVE",
            BookStatus::Sold => "SOLD",
            BookStatus::Cancelled => "CANCELLED",
            BookStatus::Deleted => "DELETED",
        };
        f.write_str(label)
    }
}

/// 도서 등록 입력
#[derive(Debug, Clone)]
pub struct NewBook {
    pub name: String,
    pub price: Decimal,
    pub customer_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Option<String>,
    pub name: String,
    pub price: Decimal,
    pub status: BookStatus,
    /// 판매자(소유 고객) ID
    pub customer_id: String,
}

impl Book {
    pub fn new(new_book: NewBook) -> Self {
        Self {
            id: None,
            name: new_book.name,
            price: new_book.price,
            status: BookStatus::Active,
            customer_id: new_book.customer_id,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BookStatus::Active
    }

    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

/// MongoDB `books` 컬렉션 문서
///
/// 가격은 정밀도 손실을 피하기 위해 문자열로 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: Decimal,
    pub status: BookStatus,
    pub customer_id: String,
}

impl BookDocument {
    pub fn from_book(book: &Book) -> AppResult<Self> {
        let id = match book.id.as_deref() {
            Some(hex) => Some(
                ObjectId::parse_str(hex).map_err(|_| AppError::not_found(ErrorCode::ML101, hex))?,
            ),
            None => None,
        };

        Ok(Self {
            id,
            name: book.name.clone(),
            price: book.price,
            status: book.status,
            customer_id: book.customer_id.clone(),
        })
    }
}

impl From<BookDocument> for Book {
    fn from(document: BookDocument) -> Self {
        Self {
            id: document.id.map(|oid| oid.to_hex()),
            name: document.name,
            price: document.price,
            status: document.status,
            customer_id: document.customer_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_book_is_active() {
        let book = Book::new(NewBook {
            name: "Dom Casmurro".to_string(),
            price: Decimal::from_str("29.90").unwrap(),
            customer_id: "507f1f77bcf86cd799439011".to_string(),
        });

        assert!(book.is_active());
        assert_eq!(book.id, None);
    }

    #[test]
    fn test_status_display_matches_wire_format() {
        assert_eq!(BookStatus::Cancelled.to_string(), "CANCELLED");
        assert_eq!(
            serde_json::to_string(&BookStatus::Sold).unwrap(),
            format!("\"{}\"", BookStatus::Sold)
        );
    }
}
