//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 저장소는 `async_trait` 기반 trait으로 정의되고, MongoDB 구현과 인메모리 구현을 가집니다.
//! 서비스는 구체 타입이 아닌 `Arc<dyn Trait>`에만 의존하며,
//! 어느 구현을 쓸지는 `ServiceRegistry`가 `STORAGE_BACKEND` 설정으로 결정합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::customers::{CustomerStore, MongoCustomerRepository};
//!
//! let store: Arc<dyn CustomerStore> =
//!     Arc::new(MongoCustomerRepository::new(database, Some(redis), 600));
//! let customer = store.find_by_email("maicon@bookstore.dev").await?;
//! ```

pub mod books;
pub mod customers;
pub mod purchases;
