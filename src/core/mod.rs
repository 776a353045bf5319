//! # Core Module
//!
//! 서비스 전반에서 공유하는 기반 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 명시적 의존성 조립
//! - **ServiceRegistry**: 저장소, 캐시, 해셔, 서비스, 이벤트 버스를 한 곳에서 생성하고 연결
//! - **생성자 주입**: 모든 협력 객체를 `Arc<dyn Trait>`으로 생성 시점에 전달
//! - **백엔드 선택**: `STORAGE_BACKEND` 설정에 따라 MongoDB 또는 인메모리 저장소 사용
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **ErrorCode**: `ML-201` 같은 안정적인 도메인 에러 코드와 메시지 템플릿
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceRegistry;
//!
//! let registry = ServiceRegistry::in_memory(Arc::new(BcryptPasswordHasher::new(4)), 4);
//! let customers = registry.customer_service.list_customers(None).await?;
//! ```

pub mod errors;
pub mod registry;
