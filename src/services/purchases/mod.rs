//! 구매 서비스 모듈

pub mod purchase_service;

pub use purchase_service::PurchaseService;
