//! # 인메모리 고객 리포지토리
//!
//! `STORAGE_BACKEND=memory`로 실행할 때와 테스트에서 사용하는 구현입니다.
//! 삽입 순서를 자연 순서로 유지하며, ID는 MongoDB와 같은 ObjectId 16진수 문자열로 할당합니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult, ErrorCode};
use crate::domain::entities::customers::{Customer, CustomerUpdate};
use crate::repositories::customers::CustomerStore;

#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<Customer>>> {
        self.customers
            .read()
            .map_err(|_| AppError::InternalError("customer store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<Customer>>> {
        self.customers
            .write()
            .map_err(|_| AppError::InternalError("customer store lock poisoned".to_string()))
    }
}

fn email_taken_by_other(customers: &[Customer], email: &str, id: Option<&str>) -> bool {
    customers
        .iter()
        .any(|c| c.email == email && c.id.as_deref() != id)
}

#[async_trait]
impl CustomerStore for InMemoryCustomerRepository {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        Ok(self.read()?.clone())
    }

    async fn find_by_name_containing(&self, name: &str) -> AppResult<Vec<Customer>> {
        Ok(self
            .read()?
            .iter()
            .filter(|c| c.name.contains(name))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Customer>> {
        Ok(self
            .read()?
            .iter()
            .find(|c| c.id.as_deref() == Some(id))
            .cloned())
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(self.read()?.iter().any(|c| c.id.as_deref() == Some(id)))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.read()?.iter().any(|c| c.email == email))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        Ok(self.read()?.iter().find(|c| c.email == email).cloned())
    }

    async fn save(&self, mut customer: Customer) -> AppResult<Customer> {
        let mut customers = self.write()?;

        if email_taken_by_other(&customers, &customer.email, customer.id.as_deref()) {
            return Err(AppError::ConflictError(format!(
                "E-mail [{}] already in use",
                customer.email
            )));
        }

        match customer.id.as_deref() {
            None => {
                customer.id = Some(ObjectId::new().to_hex());
                customers.push(customer.clone());
            }
            Some(id) => {
                let slot = customers
                    .iter_mut()
                    .find(|c| c.id.as_deref() == Some(id))
                    .ok_or_else(|| AppError::not_found(ErrorCode::ML201, id))?;
                *slot = customer.clone();
            }
        }

        Ok(customer)
    }

    async fn update(&self, update: &CustomerUpdate) -> AppResult<bool> {
        let mut customers = self.write()?;

        if email_taken_by_other(&customers, &update.email, Some(&update.id)) {
            return Err(AppError::ConflictError(format!(
                "E-mail [{}] already in use",
                update.email
            )));
        }

        match customers
            .iter_mut()
            .find(|c| c.id.as_deref() == Some(update.id.as_str()))
        {
            Some(customer) => {
                customer.name = update.name.clone();
                customer.email = update.email.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
