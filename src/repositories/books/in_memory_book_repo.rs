//! # 인메모리 도서 리포지토리

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult, ErrorCode};
use crate::domain::entities::books::{Book, BookStatus};
use crate::repositories::books::BookStore;

#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<Book>>> {
        self.books
            .read()
            .map_err(|_| AppError::InternalError("book store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<Book>>> {
        self.books
            .write()
            .map_err(|_| AppError::InternalError("book store lock poisoned".to_string()))
    }
}

#[async_trait]
impl BookStore for InMemoryBookRepository {
    async fn save(&self, mut book: Book) -> AppResult<Book> {
        let mut books = self.write()?;

        match book.id.as_deref() {
            None => {
                book.id = Some(ObjectId::new().to_hex());
                books.push(book.clone());
            }
            Some(id) => {
                let slot = books
                    .iter_mut()
                    .find(|b| b.id.as_deref() == Some(id))
                    .ok_or_else(|| AppError::not_found(ErrorCode::ML101, id))?;
                *slot = book.clone();
            }
        }

        Ok(book)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        Ok(self
            .read()?
            .iter()
            .find(|b| b.id.as_deref() == Some(id))
            .cloned())
    }

    async fn find_by_status(&self, status: BookStatus) -> AppResult<Vec<Book>> {
        Ok(self
            .read()?
            .iter()
            .filter(|b| b.status == status)
            .cloned()
            .collect())
    }

    async fn find_all_by_ids(&self, ids: &[String]) -> AppResult<Vec<Book>> {
        Ok(self
            .read()?
            .iter()
            .filter(|b| b.id.as_ref().is_some_and(|id| ids.contains(id)))
            .cloned()
            .collect())
    }

    async fn update_status_by_customer(
        &self,
        customer_id: &str,
        from: BookStatus,
        to: BookStatus,
    ) -> AppResult<u64> {
        let mut books = self.write()?;
        let mut modified = 0;

        for book in books
            .iter_mut()
            .filter(|b| b.customer_id == customer_id && b.status == from)
        {
            book.status = to;
            modified += 1;
        }

        Ok(modified)
    }

    async fn update_status(&self, ids: &[String], status: BookStatus) -> AppResult<u64> {
        let mut books = self.write()?;
        let mut matched = 0;

        for book in books
            .iter_mut()
            .filter(|b| b.id.as_ref().is_some_and(|id| ids.contains(id)))
        {
            book.status = status;
            matched += 1;
        }

        Ok(matched)
    }
}
