//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 읽기 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//! 캐시는 보조 수단이며 MongoDB가 항상 기준 저장소입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("customer:507f1f77bcf86cd799439011", &customer, 600).await?;
//!
//! let cached: Option<Customer> = cache.get("customer:507f1f77bcf86cd799439011").await?;
//! cache.del("customer:507f1f77bcf86cd799439011").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! CACHE_ENABLED=true
//! CACHE_TTL_SECONDS=600
//! ```

pub mod redis;
