//! 고객 DTO 모듈

pub mod request;
pub mod response;
