//! Purchase Entity Implementation

use chrono::{DateTime, TimeZone, Utc};
use mongodb::bson;
use mongodb::bson::oid::ObjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};

/// 구매 요청 입력
#[derive(Debug, Clone)]
pub struct PurchaseOrder {
    pub customer_id: String,
    pub book_ids: Vec<String>,
}

/// 완료된 구매
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Option<String>,
    pub customer_id: String,
    pub book_ids: Vec<String>,
    /// 전자 세금계산서 번호
    pub nfe: Option<String>,
    /// 구매한 도서 가격의 합
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// MongoDB `purchases` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub customer_id: String,
    pub book_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfe: Option<String>,
    pub price: Decimal,
    pub created_at: bson::DateTime,
}

impl PurchaseDocument {
    pub fn from_purchase(purchase: &Purchase) -> AppResult<Self> {
        let id = match purchase.id.as_deref() {
            Some(hex) => Some(ObjectId::parse_str(hex).map_err(|e| {
                AppError::InternalError(format!("잘못된 구매 ID [{}]: {}", hex, e))
            })?),
            None => None,
        };

        Ok(Self {
            id,
            customer_id: purchase.customer_id.clone(),
            book_ids: purchase.book_ids.clone(),
            nfe: purchase.nfe.clone(),
            price: purchase.price,
            created_at: bson::DateTime::from_millis(purchase.created_at.timestamp_millis()),
        })
    }
}

impl From<PurchaseDocument> for Purchase {
    fn from(document: PurchaseDocument) -> Self {
        let created_at = Utc
            .timestamp_millis_opt(document.created_at.timestamp_millis())
            .single()
            .unwrap_or_default();

        Self {
            id: document.id.map(|oid| oid.to_hex()),
            customer_id: document.customer_id,
            book_ids: document.book_ids,
            nfe: document.nfe,
            price: document.price,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_round_trip_keeps_millisecond_timestamp() {
        let created_at = Utc.timestamp_millis_opt(1_700_000_000_123).single().unwrap();
        let purchase = Purchase {
            id: Some("507f1f77bcf86cd799439011".to_string()),
            customer_id: "507f191e810c19729de860ea".to_string(),
            book_ids: vec!["507f191e810c19729de860eb".to_string()],
            nfe: Some("nfe-1".to_string()),
            price: Decimal::new(4990, 2),
            created_at,
        };

        let document = PurchaseDocument::from_purchase(&purchase).unwrap();
        assert_eq!(Purchase::from(document), purchase);
    }
}
