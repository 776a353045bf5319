//! 서점 고객 서비스
//!
//! 고객 생명주기(등록/조회/수정/소프트 삭제), 도서 판매 등록, 구매와
//! 구매 완료 이벤트 기반의 비동기 판매 정산을 제공하는 REST 서비스입니다.
//!
//! # Modules
//!
//! - [`core`] - 에러 타입과 서비스 레지스트리
//! - [`config`] - 환경 변수 기반 설정
//! - [`db`], [`caching`] - MongoDB / Redis 연결
//! - [`domain`] - 엔티티, DTO, 도메인 이벤트
//! - [`repositories`] - 저장소 trait과 구현
//! - [`services`] - 비즈니스 로직
//! - [`events`] - 이벤트 버스와 리스너
//! - [`handlers`], [`routes`] - HTTP 계층

pub mod caching;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod events;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
