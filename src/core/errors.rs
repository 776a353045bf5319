//! # 통합 에러 처리
//!
//! 서비스 전역에서 사용하는 에러 타입과 에러 코드를 정의합니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 한 번으로 일관된 HTTP 에러 응답이 만들어지도록 합니다.
//!
//! ## 에러 분류
//!
//! ### 1. 도메인 에러 (코드 보유)
//! - `NotFound`: 참조한 고객/도서가 존재하지 않음 (404)
//! - `Unprocessable`: 현재 상태에서 허용되지 않는 작업 (422)
//! - `ValidationError`: 요청 본문 검증 실패 (400)
//!
//! ### 2. 인프라 에러 (코드 없음)
//! - `DatabaseError`, `RedisError`, `InternalError` 등은 가공 없이 경계까지 전파되어
//!   500 응답이 됩니다.
//!
//! ## 에러 코드
//!
//! 도메인 에러는 [`ErrorCode`]의 안정적인 코드(`ML-201` 등)와 메시지 템플릿을 사용합니다.
//! 코드와 메시지는 API 소비자가 단언(assert)하는 계약이므로 변경하지 않습니다.
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ErrorCode};
//!
//! let err = AppError::not_found(ErrorCode::ML201, "507f1f77bcf86cd799439011");
//! assert_eq!(err.to_string(), "Customer [507f1f77bcf86cd799439011] not exists");
//! assert_eq!(err.code(), Some("ML-201"));
//! ```

use std::fmt::Display;

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 안정적인 도메인 에러 코드
///
/// 각 코드는 고정된 식별자와 `{}` 자리표시자를 가진 메시지 템플릿을 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// 잘못된 요청 본문
    ML001,
    /// 도서 없음
    ML101,
    /// 현재 상태에서 도서를 변경할 수 없음
    ML102,
    /// 구매할 수 없는 도서
    ML103,
    /// 고객 없음
    ML201,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::ML001 => "ML-001",
            ErrorCode::ML101 => "ML-101",
            ErrorCode::ML102 => "ML-102",
            ErrorCode::ML103 => "ML-103",
            ErrorCode::ML201 => "ML-201",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            ErrorCode::ML001 => "Invalid Request",
            ErrorCode::ML101 => "Book [{}] not exists",
            ErrorCode::ML102 => "Cannot update book with status [{}]",
            ErrorCode::ML103 => "Book [{}] is not available for purchase",
            ErrorCode::ML201 => "Customer [{}] not exists",
        }
    }

    /// 템플릿의 자리표시자를 `arg`로 채운 메시지를 만듭니다.
    pub fn message(&self, arg: impl Display) -> String {
        self.template().replacen("{}", &arg.to_string(), 1)
    }
}

/// 필드 단위 검증 실패 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
    pub field: String,
}

/// 애플리케이션 전역 에러 타입
///
/// 서비스 계층은 도메인 에러(`NotFound`, `Unprocessable`)만 직접 생성하고,
/// 저장소/캐시/해싱 실패는 해당 계층에서 만들어진 변형 그대로 전파합니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// bcrypt::hash(plain, cost).context("password hashing failed")?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 참조한 리소스가 존재하지 않음 (404 Not Found)
    #[error("{message}")]
    NotFound { code: &'static str, message: String },

    /// 리소스 상태 때문에 수행할 수 없는 작업 (422 Unprocessable Entity)
    #[error("{message}")]
    Unprocessable { code: &'static str, message: String },

    /// 요청 본문 검증 실패 (400 Bad Request)
    #[error("Invalid Request")]
    ValidationError(Vec<FieldError>),

    /// 유니크 제약 등 저장소 충돌 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// MongoDB 연산 실패 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 연산 실패 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 예상하지 못한 시스템 오류 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn not_found(code: ErrorCode, arg: impl Display) -> Self {
        AppError::NotFound {
            code: code.code(),
            message: code.message(arg),
        }
    }

    pub fn unprocessable(code: ErrorCode, arg: impl Display) -> Self {
        AppError::Unprocessable {
            code: code.code(),
            message: code.message(arg),
        }
    }

    /// 단일 필드 검증 실패를 만듭니다.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![FieldError {
            message: message.into(),
            field: field.into(),
        }])
    }

    /// 도메인 에러의 안정적인 코드. 인프라 에러는 `None`.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            AppError::NotFound { code, .. } | AppError::Unprocessable { code, .. } => Some(code),
            AppError::ValidationError(_) => Some(ErrorCode::ML001.code()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                    field: field.to_string(),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationError(fields)
    }
}

/// HTTP 에러 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub http_code: u16,
    pub message: String,
    pub internal_code: Option<String>,
    pub errors: Option<Vec<FieldError>>,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 모든 에러를 동일한 JSON 형식으로 변환합니다.
    ///
    /// 5xx 에러는 서버 로그에만 상세 내용을 남기고 클라이언트에는 일반 메시지를 돌려줍니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let errors = match self {
            AppError::ValidationError(fields) => Some(fields.clone()),
            _ => None,
        };

        actix_web::HttpResponse::build(status).json(ErrorResponse {
            http_code: status.as_u16(),
            message,
            internal_code: self.code().map(str::to_string),
            errors,
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError::InternalError`로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hashed = bcrypt::hash(plain, cost).context("password hashing failed")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_customer_not_found_message_and_code() {
        let error = AppError::not_found(ErrorCode::ML201, "abc123");

        assert_eq!(error.to_string(), "Customer [abc123] not exists");
        assert_eq!(error.code(), Some("ML-201"));
        assert!(error.is_not_found());
    }

    #[test]
    fn test_book_status_message() {
        let error = AppError::unprocessable(ErrorCode::ML102, "CANCELLED");

        assert_eq!(error.to_string(), "Cannot update book with status [CANCELLED]");
        assert_eq!(error.code(), Some("ML-102"));
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::not_found(ErrorCode::ML101, "1");
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unprocessable_error_response() {
        let error = AppError::unprocessable(ErrorCode::ML103, "1");
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::invalid_field("email", "E-mail must be valid");

        assert_eq!(error.code(), Some("ML-001"));
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_infrastructure_errors_have_no_code() {
        let error = AppError::DatabaseError("connection reset".to_string());

        assert_eq!(error.code(), None);
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
