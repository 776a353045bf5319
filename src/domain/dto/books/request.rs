//! 도서 요청 DTO

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::books::NewBook;
use crate::utils::string_utils::validate_not_blank;

/// 도서 등록 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostBookRequest {
    #[validate(custom(function = "validate_not_blank", message = "Name must be informed"))]
    pub name: String,

    #[validate(required(message = "Price must be informed"))]
    pub price: Option<Decimal>,

    #[validate(custom(function = "validate_not_blank", message = "Customer must be informed"))]
    pub customer_id: String,
}

impl PostBookRequest {
    /// 도서 등록 입력으로 변환합니다. 가격이 없으면 검증 에러입니다.
    pub fn into_new_book(self) -> AppResult<NewBook> {
        let price = self
            .price
            .ok_or_else(|| AppError::invalid_field("price", "Price must be informed"))?;

        Ok(NewBook {
            name: self.name,
            price,
            customer_id: self.customer_id,
        })
    }
}
