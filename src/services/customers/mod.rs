//! 고객 관리 서비스 모듈
//!
//! 고객 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 고객 등록 (역할/상태 강제, 비밀번호 해싱)
//! - 이름 부분 일치 검색
//! - 이름/이메일 수정
//! - 소프트 삭제 (도서 정리 후 `INACTIVE`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::customers::CustomerService;
//!
//! let service = CustomerService::new(store, settlement, hasher);
//! service.delete_customer("507f1f77bcf86cd799439011").await?;
//! ```

pub mod customer_service;

pub use customer_service::CustomerService;
