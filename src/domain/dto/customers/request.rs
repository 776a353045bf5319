//! 고객 요청 DTO
//!
//! 고객 생성/수정을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 이메일 사용 가능 여부는 저장소 조회가 필요하므로 핸들러에서 별도로 확인합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::customers::{CustomerRegistration, CustomerUpdate};
use crate::utils::string_utils::validate_not_blank;

/// 고객 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostCustomerRequest {
    #[validate(custom(function = "validate_not_blank", message = "Name must be informed"))]
    pub name: String,

    #[validate(email(message = "E-mail must be valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must be informed"))]
    pub password: String,
}

impl From<PostCustomerRequest> for CustomerRegistration {
    fn from(request: PostCustomerRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

/// 고객 수정 요청 DTO
///
/// 상태와 비밀번호는 받지 않습니다. 수정 대상 ID는 경로에서 옵니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PutCustomerRequest {
    #[validate(custom(function = "validate_not_blank", message = "Name must be informed"))]
    pub name: String,

    #[validate(email(message = "E-mail must be valid"))]
    pub email: String,
}

impl PutCustomerRequest {
    pub fn into_update(self, id: String) -> CustomerUpdate {
        CustomerUpdate {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// 고객 목록 조회 쿼리 (`?name=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerListQuery {
    pub name: Option<String>,
}

/// 이메일 사용 가능 여부 쿼리 (`?email=`)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailAvailableQuery {
    pub email: String,
}
