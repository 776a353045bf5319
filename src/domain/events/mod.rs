//! 도메인 이벤트 모듈
//!
//! 이벤트는 발행 후 비동기로 처리되며, 이벤트 사이의 순서는 보장되지 않습니다.

pub mod purchase_completed;

pub use purchase_completed::PurchaseCompleted;
