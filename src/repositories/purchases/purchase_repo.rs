//! # 구매 리포지토리 구현

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{Collection, bson::doc};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::purchases::{Purchase, PurchaseDocument},
    repositories::purchases::PurchaseStore,
};

const COLLECTION: &str = "purchases";

pub struct MongoPurchaseRepository {
    db: Arc<Database>,
}

impl MongoPurchaseRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<PurchaseDocument> {
        self.db.collection::<PurchaseDocument>(COLLECTION)
    }
}

#[async_trait]
impl PurchaseStore for MongoPurchaseRepository {
    async fn save(&self, mut purchase: Purchase) -> AppResult<Purchase> {
        let document = PurchaseDocument::from_purchase(&purchase)?;

        let result = self
            .collection()
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if purchase.id.is_none() {
            let object_id = result.inserted_id.as_object_id().ok_or_else(|| {
                AppError::InternalError("삽입된 구매 ID가 ObjectId가 아닙니다".to_string())
            })?;
            purchase.id = Some(object_id.to_hex());
        }

        Ok(purchase)
    }

    async fn find_by_customer(&self, customer_id: &str) -> AppResult<Vec<Purchase>> {
        let documents: Vec<PurchaseDocument> = self
            .collection()
            .find(doc! { "customer_id": customer_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(Purchase::from).collect())
    }
}
