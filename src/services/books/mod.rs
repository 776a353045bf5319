//! 도서 서비스 모듈
//!
//! 도서 판매 등록/취소와, 다른 서비스가 의존하는 [`BookSettlement`] 기능을 제공합니다.

pub mod book_service;

pub use book_service::{BookService, BookSettlement};
