//! # 인메모리 구매 리포지토리

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::purchases::Purchase;
use crate::repositories::purchases::PurchaseStore;

#[derive(Debug, Default)]
pub struct InMemoryPurchaseRepository {
    purchases: RwLock<Vec<Purchase>>,
}

impl InMemoryPurchaseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PurchaseStore for InMemoryPurchaseRepository {
    async fn save(&self, mut purchase: Purchase) -> AppResult<Purchase> {
        let mut purchases = self
            .purchases
            .write()
            .map_err(|_| AppError::InternalError("purchase store lock poisoned".to_string()))?;

        if purchase.id.is_none() {
            purchase.id = Some(ObjectId::new().to_hex());
        }
        purchases.push(purchase.clone());

        Ok(purchase)
    }

    async fn find_by_customer(&self, customer_id: &str) -> AppResult<Vec<Purchase>> {
        let purchases = self
            .purchases
            .read()
            .map_err(|_| AppError::InternalError("purchase store lock poisoned".to_string()))?;

        Ok(purchases
            .iter()
            .filter(|p| p.customer_id == customer_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn purchase(customer_id: &str) -> Purchase {
        Purchase {
            id: None,
            customer_id: customer_id.to_string(),
            book_ids: vec!["507f191e810c19729de860ea".to_string()],
            nfe: None,
            price: Decimal::new(1000, 2),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_filters_by_customer() {
        let repo = InMemoryPurchaseRepository::new();

        let saved = repo.save(purchase("a")).await.unwrap();
        repo.save(purchase("b")).await.unwrap();

        assert!(ObjectId::parse_str(saved.id.as_deref().unwrap()).is_ok());
        assert_eq!(repo.find_by_customer("a").await.unwrap(), vec![saved]);
        assert!(repo.find_by_customer("c").await.unwrap().is_empty());
    }
}
