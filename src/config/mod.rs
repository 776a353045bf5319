//! # Configuration Module
//!
//! 서비스 설정값을 환경 변수 기반으로 중앙집중식 관리하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 캐시, 서버, 이벤트, 보안 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export STORAGE_BACKEND="mongo"        # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="bookstore_dev"
//!
//! # 캐시
//! export REDIS_URL="redis://localhost:6379"
//! export CACHE_ENABLED="true"
//! export CACHE_TTL_SECONDS="600"
//!
//! # 구매 완료 이벤트 리스너 동시 실행 수
//! export EVENT_LISTENER_WORKERS="4"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"       # development, test, staging, production
//! export BCRYPT_COST="12"               # 4-15 범위
//! ```

pub mod data_config;

pub use data_config::*;
