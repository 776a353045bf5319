//! # 도서 리포지토리 구현
//!
//! 도서 엔티티의 MongoDB 데이터 액세스 계층입니다.
//! 도서 상태는 구매 정산 리스너가 비동기로 바꾸기 때문에 캐시하지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc, oid::ObjectId},
    options::IndexOptions,
};

use crate::{
    core::errors::{AppError, AppResult, ErrorCode},
    db::Database,
    domain::entities::books::{Book, BookDocument, BookStatus},
    repositories::books::BookStore,
};

const COLLECTION: &str = "books";

pub struct MongoBookRepository {
    db: Arc<Database>,
}

impl MongoBookRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<BookDocument> {
        self.db.collection::<BookDocument>(COLLECTION)
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<Book>> {
        let documents: Vec<BookDocument> = self
            .collection()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(Book::from).collect())
    }

    /// 판매자별 상태 조회용 복합 인덱스와 상태 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let customer_status_index = IndexModel::builder()
            .keys(doc! { "customer_id": 1, "status": 1 })
            .options(
                IndexOptions::builder()
                    .name("customer_status".to_string())
                    .build(),
            )
            .build();

        let status_index = IndexModel::builder()
            .keys(doc! { "status": 1 })
            .options(IndexOptions::builder().name("status_asc".to_string()).build())
            .build();

        self.collection()
            .create_indexes([customer_status_index, status_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 형식이 올바른 ID만 ObjectId로 변환합니다.
fn object_ids(ids: &[String]) -> Vec<ObjectId> {
    ids.iter()
        .filter_map(|id| ObjectId::parse_str(id).ok())
        .collect()
}

#[async_trait]
impl BookStore for MongoBookRepository {
    async fn save(&self, mut book: Book) -> AppResult<Book> {
        let document = BookDocument::from_book(&book)?;

        match document.id {
            None => {
                let result = self
                    .collection()
                    .insert_one(&document)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                let object_id = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::InternalError("삽입된 도서 ID가 ObjectId가 아닙니다".to_string())
                })?;
                book.id = Some(object_id.to_hex());
            }
            Some(object_id) => {
                let result = self
                    .collection()
                    .replace_one(doc! { "_id": object_id }, &document)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                if result.matched_count == 0 {
                    return Err(AppError::not_found(ErrorCode::ML101, book.id_str()));
                }
            }
        }

        Ok(book)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let book = self
            .collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(Book::from);

        Ok(book)
    }

    async fn find_by_status(&self, status: BookStatus) -> AppResult<Vec<Book>> {
        self.find_many(doc! { "status": status.to_string() }).await
    }

    async fn find_all_by_ids(&self, ids: &[String]) -> AppResult<Vec<Book>> {
        let ids = object_ids(ids);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.find_many(doc! { "_id": { "$in": ids } }).await
    }

    async fn update_status_by_customer(
        &self,
        customer_id: &str,
        from: BookStatus,
        to: BookStatus,
    ) -> AppResult<u64> {
        let result = self
            .collection()
            .update_many(
                doc! { "customer_id": customer_id, "status": from.to_string() },
                doc! { "$set": { "status": to.to_string() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count)
    }

    async fn update_status(&self, ids: &[String], status: BookStatus) -> AppResult<u64> {
        let ids = object_ids(ids);
        if ids.is_empty() {
            return Ok(0);
        }

        let result = self
            .collection()
            .update_many(
                doc! { "_id": { "$in": ids } },
                doc! { "$set": { "status": status.to_string() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count)
    }
}
