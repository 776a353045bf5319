//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 서비스는 `web::Data<ServiceRegistry>`로 주입받습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증, DTO 변환              ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직, 이벤트 발행            ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB / Redis / 인메모리       ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 패턴
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_book(
//!     registry: web::Data<ServiceRegistry>,
//!     payload: web::Json<PostBookRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;                       // ValidationErrors → AppError (400, ML-001)
//!     let book = registry.book_service.create_book(..).await?;
//!     Ok(HttpResponse::Created().json(BookResponse::from(book)))
//! }
//! ```

pub mod books;
pub mod customers;
pub mod purchases;
