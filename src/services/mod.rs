//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 싱글톤 없이 생성자로 협력 객체(`Arc<dyn Trait>`)를 주입받습니다.
//! 조립은 [`crate::core::registry::ServiceRegistry`]가 담당합니다.
//!
//! # Features
//!
//! - 고객 생명주기 관리 (생성, 조회, 수정, 소프트 삭제)
//! - 도서 등록/취소와 판매 정산
//! - 구매 생성 및 구매 완료 이벤트 발행
//! - bcrypt 비밀번호 해싱
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::customers::CustomerService;
//!
//! let service = CustomerService::new(store, book_service, hasher);
//! let customers = service.list_customers(None).await?;
//! ```

pub mod books;
pub mod customers;
pub mod purchases;
pub mod security;

#[cfg(test)]
pub(crate) mod test_support;
