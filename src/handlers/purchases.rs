//! # Purchase HTTP Handlers

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::domain::dto::purchases::request::PostPurchaseRequest;
use crate::domain::dto::purchases::response::PurchaseResponse;

/// 구매 생성
///
/// 응답 시점에 구매는 저장되어 있지만, 도서의 `SOLD` 전환은 비동기로 진행 중일 수 있습니다.
///
/// # 요청 본문
///
/// ```json
/// {
///   "customer_id": "507f1f77bcf86cd799439011",
///   "book_ids": ["507f191e810c19729de860ea"]
/// }
/// ```
#[post("")]
pub async fn create_purchase(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<PostPurchaseRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let purchase = registry
        .purchase_service
        .create_purchase(payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Created().json(PurchaseResponse::from(purchase)))
}
