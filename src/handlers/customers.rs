//! # Customer HTTP Handlers
//!
//! 고객 관리 REST 엔드포인트입니다. 요청 검증은 `validator`로 하고,
//! 서비스 에러는 `AppError`의 `ResponseError` 구현으로 HTTP 응답이 됩니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/customers?name=` | 목록 조회 (이름 부분 일치) | 200 OK |
//! | `POST` | `/customers` | 고객 등록 | 201 Created |
//! | `GET` | `/customers/email-available?email=` | 이메일 사용 가능 여부 | 200 OK |
//! | `GET` | `/customers/{id}` | 고객 조회 | 200 OK |
//! | `PUT` | `/customers/{id}` | 이름/이메일 수정 | 204 No Content |
//! | `DELETE` | `/customers/{id}` | 소프트 삭제 | 204 No Content |
//! | `GET` | `/customers/{id}/purchases` | 구매 내역 | 200 OK |
//!
//! `email-available`은 `{id}`보다 먼저 등록해야 경로가 가려지지 않습니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::domain::dto::customers::request::{
    CustomerListQuery, EmailAvailableQuery, PostCustomerRequest, PutCustomerRequest,
};
use crate::domain::dto::customers::response::{CustomerResponse, EmailAvailableResponse};
use crate::domain::dto::purchases::response::PurchaseResponse;

/// 고객 목록 조회
///
/// `name`이 비어 있지 않으면 이름 부분 일치 검색, 아니면 전체(비활성 포함)를 반환합니다.
#[get("")]
pub async fn list_customers(
    registry: web::Data<ServiceRegistry>,
    query: web::Query<CustomerListQuery>,
) -> Result<HttpResponse, AppError> {
    let customers = registry
        .customer_service
        .list_customers(query.name.as_deref())
        .await?;

    let response: Vec<CustomerResponse> = customers.into_iter().map(CustomerResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// 고객 등록
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Maicon",
///   "email": "maicon@bookstore.dev",
///   "password": "s3cret"
/// }
/// ```
///
/// # 실패 사례
///
/// ### 검증 실패 / 사용 중인 이메일 (400 Bad Request)
/// ```json
/// {
///   "http_code": 400,
///   "message": "Invalid Request",
///   "internal_code": "ML-001",
///   "errors": [{ "message": "E-mail not available", "field": "email" }]
/// }
/// ```
#[post("")]
pub async fn create_customer(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<PostCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = &registry.customer_service;
    if !service.is_email_available(&payload.email).await? {
        return Err(AppError::invalid_field("email", "E-mail not available"));
    }

    service.create_customer(payload.into_inner().into()).await?;

    Ok(HttpResponse::Created().finish())
}

#[get("/email-available")]
pub async fn email_available(
    registry: web::Data<ServiceRegistry>,
    query: web::Query<EmailAvailableQuery>,
) -> Result<HttpResponse, AppError> {
    let available = registry
        .customer_service
        .is_email_available(&query.email)
        .await?;

    Ok(HttpResponse::Ok().json(EmailAvailableResponse { available }))
}

/// 고객 조회
///
/// 없는 ID는 `404`, `ML-201`입니다.
#[get("/{id}")]
pub async fn get_customer(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let customer = registry.customer_service.get_customer(&id).await?;

    Ok(HttpResponse::Ok().json(CustomerResponse::from(customer)))
}

/// 고객 수정
///
/// 이름과 이메일만 변경합니다. 상태와 비밀번호는 요청에 있어도 무시됩니다.
#[put("/{id}")]
pub async fn update_customer(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<String>,
    payload: web::Json<PutCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    registry
        .customer_service
        .update_customer(payload.into_inner().into_update(id.into_inner()))
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 고객 소프트 삭제
///
/// 고객이 판매 중인 도서를 모두 `DELETED`로 바꾼 뒤 고객을 `INACTIVE`로 저장합니다.
#[delete("/{id}")]
pub async fn delete_customer(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    registry.customer_service.delete_customer(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[get("/{id}/purchases")]
pub async fn list_customer_purchases(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let purchases = registry.purchase_service.list_purchases_of(&id).await?;

    let response: Vec<PurchaseResponse> = purchases.into_iter().map(PurchaseResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}
