//! 도메인 계층 모듈
//!
//! 고객, 도서, 구매의 핵심 값 타입과 HTTP 경계용 DTO, 그리고 도메인 이벤트를 정의합니다.
//!
//! # Modules
//!
//! - [`entities`] - 도메인 값 타입과 MongoDB 문서 타입
//! - [`dto`] - 요청/응답 데이터 전송 객체
//! - [`events`] - 서비스 간에 비동기로 전달되는 도메인 이벤트
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::domain::entities::customers::{Customer, CustomerRegistration};
//! use crate::domain::dto::customers::response::CustomerResponse;
//!
//! let response = CustomerResponse::from(customer);
//! ```

pub mod dto;
pub mod entities;
pub mod events;
