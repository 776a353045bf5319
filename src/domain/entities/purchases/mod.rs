//! 구매 엔티티 모듈

pub mod purchase;

pub use purchase::*;
