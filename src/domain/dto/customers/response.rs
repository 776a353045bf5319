use serde::{Deserialize, Serialize};

use crate::domain::entities::customers::{Customer, Status};

/// 고객 응답 DTO
///
/// 비밀번호 해시와 역할은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: Status,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        let Customer {
            id,
            name,
            email,
            status,
            ..
        } = customer;

        Self {
            id: id.unwrap_or_default(),
            name,
            email,
            status,
        }
    }
}

/// 이메일 사용 가능 여부 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAvailableResponse {
    pub available: bool,
}
