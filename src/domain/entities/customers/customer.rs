//! Customer Entity Implementation
//!
//! 고객 엔티티의 핵심 구현체입니다.
//! 상태 전이는 `ACTIVE → INACTIVE` 한 방향뿐이며, 비밀번호는 해시로만 보관합니다.

use std::collections::BTreeSet;
use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult, ErrorCode};

/// 고객 상태
///
/// `INACTIVE`는 종료 상태이며 고객 삭제(soft delete)로만 도달합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Active,
    Inactive,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Active => write!(f, "ACTIVE"),
            Status::Inactive => write!(f, "INACTIVE"),
        }
    }
}

/// 고객 역할
///
/// 생성 시점에는 항상 `{CUSTOMER}`이며 호출자가 지정할 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
}

/// 고객 생성 입력
///
/// 평문 비밀번호를 담는 유일한 타입입니다. 서비스가 해싱한 뒤 [`Customer`]로 변환합니다.
#[derive(Debug, Clone)]
pub struct CustomerRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// 고객 도메인 값
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// 저장소가 생성 시 할당하는 24자리 16진수 ObjectId 문자열
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub status: Status,
    /// 비밀번호 해시
    pub password: String,
    pub roles: BTreeSet<Role>,
}

impl Customer {
    /// 등록 입력과 해시된 비밀번호로 새 고객을 만듭니다.
    ///
    /// 상태는 `ACTIVE`, 역할은 `{CUSTOMER}`로 고정됩니다.
    pub fn register(registration: CustomerRegistration, password_hash: String) -> Self {
        Self {
            id: None,
            name: registration.name,
            email: registration.email,
            status: Status::Active,
            password: password_hash,
            roles: BTreeSet::from([Role::Customer]),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// 고객을 비활성화합니다. 이미 비활성 상태면 그대로 둡니다.
    pub fn deactivate(&mut self) {
        self.status = Status::Inactive;
    }

    /// 할당된 ID. 저장 전 고객이면 빈 문자열을 반환합니다.
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

/// 고객 수정 입력
///
/// 상태와 비밀번호 필드가 없으므로 수정 경로는 이 둘을 바꿀 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// MongoDB `customers` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub status: Status,
    pub password: String,
    pub roles: Vec<Role>,
}

impl CustomerDocument {
    /// 도메인 값을 저장 문서로 변환합니다.
    ///
    /// ID가 ObjectId 형식이 아니면 해당 고객은 저장소에 존재할 수 없으므로 `ML-201`을 반환합니다.
    pub fn from_customer(customer: &Customer) -> AppResult<Self> {
        let id = match customer.id.as_deref() {
            Some(hex) => Some(
                ObjectId::parse_str(hex).map_err(|_| AppError::not_found(ErrorCode::ML201, hex))?,
            ),
            None => None,
        };

        Ok(Self {
            id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            status: customer.status,
            password: customer.password.clone(),
            roles: customer.roles.iter().copied().collect(),
        })
    }
}

/// Redis 캐시 값
///
/// 비밀번호 해시는 캐시에 두지 않습니다. 캐시에서 복원한 고객은 `password`가 비어 있으므로
/// 전체 레코드를 다시 쓰는 경로는 캐시를 거치지 않는 조회를 사용해야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedCustomer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: Status,
    pub roles: BTreeSet<Role>,
}

impl From<&Customer> for CachedCustomer {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id_str().to_string(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            status: customer.status,
            roles: customer.roles.clone(),
        }
    }
}

impl CachedCustomer {
    pub fn into_customer(self) -> Customer {
        Customer {
            id: Some(self.id),
            name: self.name,
            email: self.email,
            status: self.status,
            password: String::new(),
            roles: self.roles,
        }
    }
}

impl From<CustomerDocument> for Customer {
    fn from(document: CustomerDocument) -> Self {
        Self {
            id: document.id.map(|oid| oid.to_hex()),
            name: document.name,
            email: document.email,
            status: document.status,
            password: document.password,
            roles: document.roles.into_iter().collect(),
        }
    }
}
