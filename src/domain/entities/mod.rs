//! 도메인 엔티티 모듈
//!
//! 각 엔티티는 서비스가 다루는 도메인 값 타입과, 저장소가 MongoDB에 기록하는
//! 문서 타입(`*Document`)을 분리해서 가집니다.

pub mod books;
pub mod customers;
pub mod purchases;
