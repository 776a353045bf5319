//! # Book HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/books` | 도서 판매 등록 | 201 Created |
//! | `GET` | `/books` | 판매 중인 도서 목록 | 200 OK |
//! | `GET` | `/books/{id}` | 도서 조회 | 200 OK |
//! | `DELETE` | `/books/{id}` | 판매 취소 | 204 No Content |

use actix_web::{HttpResponse, delete, get, post, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::domain::dto::books::request::PostBookRequest;
use crate::domain::dto::books::response::BookResponse;

/// 도서 판매 등록
///
/// 판매자(`customer_id`)가 존재하지 않으면 `404`, `ML-201`입니다.
#[post("")]
pub async fn create_book(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<PostBookRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let new_book = payload.into_inner().into_new_book()?;
    registry.customer_service.get_customer(&new_book.customer_id).await?;

    let book = registry.book_service.create_book(new_book).await?;

    Ok(HttpResponse::Created().json(BookResponse::from(book)))
}

#[get("")]
pub async fn list_active_books(
    registry: web::Data<ServiceRegistry>,
) -> Result<HttpResponse, AppError> {
    let books = registry.book_service.list_active_books().await?;

    let response: Vec<BookResponse> = books.into_iter().map(BookResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

#[get("/{id}")]
pub async fn get_book(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let book = registry.book_service.get_book(&id).await?;

    Ok(HttpResponse::Ok().json(BookResponse::from(book)))
}

/// 도서 판매 취소
///
/// `ACTIVE`가 아닌 도서는 `422`, `ML-102`입니다.
#[delete("/{id}")]
pub async fn cancel_book(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    registry.book_service.cancel_book(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
