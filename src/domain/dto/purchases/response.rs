use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::purchases::Purchase;

/// 구매 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub id: String,
    pub customer_id: String,
    pub book_ids: Vec<String>,
    pub nfe: Option<String>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Purchase> for PurchaseResponse {
    fn from(purchase: Purchase) -> Self {
        Self {
            id: purchase.id.unwrap_or_default(),
            customer_id: purchase.customer_id,
            book_ids: purchase.book_ids,
            nfe: purchase.nfe,
            price: purchase.price,
            created_at: purchase.created_at,
        }
    }
}
