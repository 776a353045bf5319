//! # 이벤트 처리 모듈
//!
//! 서비스 사이의 비동기 알림을 tokio 채널과 워커 풀 디스패처로 전달합니다.
//!
//! ```text
//! PurchaseService ──publish──▶ [unbounded mpsc] ──▶ dispatcher task
//!                                                      │  (Semaphore: EVENT_LISTENER_WORKERS)
//!                                                      ├──▶ spawn(listener A, event)
//!                                                      └──▶ spawn(listener B, event)
//! ```
//!
//! - 발행은 큐에 넣고 바로 반환합니다 (fire-and-forget).
//! - 이벤트 사이의 순서는 보장되지 않습니다.
//! - 리스너 실패는 `error` 로그로만 남고 재시도하지 않습니다. 리스너는 멱등적이어야 합니다.
//!
//! # Modules
//!
//! - [`bus`] - 발행자, 디스패처, 리스너 trait
//! - [`listeners`] - 도메인 이벤트 리스너 구현

pub mod bus;
pub mod listeners;

pub use bus::{DispatcherHandle, EventBus, EventListener, EventPublisher};
