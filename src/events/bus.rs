//! # 이벤트 버스
//!
//! tokio `mpsc` 채널 위에 만든 단순한 발행/구독 메커니즘입니다.
//!
//! ## 전달 보장
//!
//! - **at-least-once 허용**: 같은 이벤트가 두 번 처리될 수 있으므로 리스너는 멱등적이어야 합니다.
//! - **순서 없음**: (이벤트, 리스너) 쌍마다 별도 태스크에서 실행됩니다.
//! - **재시도 없음**: 리스너 실패는 해당 이벤트에 대해 최종적이며 로그로만 남습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let listener: Arc<dyn EventListener<PurchaseCompleted>> =
//!     Arc::new(UpdateSoldBookListener::new(book_service));
//! let (publisher, dispatcher) = EventBus::start(vec![listener], 4);
//!
//! publisher.publish(event)?;      // 즉시 반환
//!
//! drop(publisher);
//! dispatcher.join().await?;       // 대기 중인 이벤트와 실행 중인 리스너가 끝날 때까지 대기
//! ```

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Semaphore, mpsc, oneshot};
use tokio::task::{JoinHandle, JoinSet};

use crate::core::errors::{AppError, AppResult};

/// 이벤트 리스너
#[async_trait]
pub trait EventListener<E>: Send + Sync {
    /// 로그에 쓰이는 리스너 이름
    fn name(&self) -> &'static str;

    async fn on_event(&self, event: E) -> AppResult<()>;
}

/// 이벤트 발행자
///
/// 복제 가능하며, 모든 복제본이 드롭되면 디스패처가 남은 이벤트를 처리한 뒤 종료합니다.
pub struct EventPublisher<E> {
    sender: mpsc::UnboundedSender<E>,
}

impl<E> Clone for EventPublisher<E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<E> EventPublisher<E> {
    /// 이벤트를 큐에 넣습니다. 리스너 실행을 기다리지 않습니다.
    ///
    /// 디스패처가 이미 종료된 경우에만 `InternalError`를 반환합니다.
    pub fn publish(&self, event: E) -> AppResult<()> {
        self.sender
            .send(event)
            .map_err(|_| AppError::InternalError("event dispatcher is not running".to_string()))
    }
}

/// 디스패처 태스크 제어 핸들
pub struct DispatcherHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl DispatcherHandle {
    /// 모든 발행자가 드롭되고 실행 중인 리스너가 끝날 때까지 기다립니다.
    pub async fn join(self) -> AppResult<()> {
        let DispatcherHandle { shutdown, task } = self;
        let result = task.await;
        drop(shutdown);

        result.map_err(|e| AppError::InternalError(format!("event dispatcher failed: {}", e)))
    }

    /// 새 발행을 막고, 이미 큐에 있는 이벤트와 실행 중인 리스너를 마친 뒤 종료합니다.
    pub async fn shutdown(self) -> AppResult<()> {
        let DispatcherHandle { shutdown, task } = self;
        let _ = shutdown.send(());

        task.await
            .map_err(|e| AppError::InternalError(format!("event dispatcher failed: {}", e)))
    }
}

pub struct EventBus;

impl EventBus {
    /// 디스패처 태스크를 시작합니다. tokio 런타임 안에서 호출해야 합니다.
    ///
    /// `workers`는 동시에 실행되는 (이벤트, 리스너) 쌍의 최대 수이며 최소 1입니다.
    pub fn start<E>(
        listeners: Vec<Arc<dyn EventListener<E>>>,
        workers: usize,
    ) -> (EventPublisher<E>, DispatcherHandle)
    where
        E: Clone + Debug + Send + 'static,
    {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let task = tokio::spawn(dispatch(receiver, shutdown_rx, listeners, workers.max(1)));

        log::info!("📨 이벤트 디스패처 시작 (workers: {})", workers.max(1));

        (
            EventPublisher { sender },
            DispatcherHandle {
                shutdown: shutdown_tx,
                task,
            },
        )
    }
}

async fn dispatch<E>(
    mut receiver: mpsc::UnboundedReceiver<E>,
    mut shutdown: oneshot::Receiver<()>,
    listeners: Vec<Arc<dyn EventListener<E>>>,
    workers: usize,
) where
    E: Clone + Debug + Send + 'static,
{
    let permits = Arc::new(Semaphore::new(workers));
    let mut in_flight = JoinSet::new();
    let mut watching_shutdown = true;

    loop {
        let next = tokio::select! {
            signal = &mut shutdown, if watching_shutdown => {
                watching_shutdown = false;
                // 핸들이 그냥 드롭된 경우는 종료 요청으로 보지 않음
                if signal.is_ok() {
                    receiver.close();
                }
                continue;
            }
            next = receiver.recv() => next,
        };

        let Some(event) = next else {
            break;
        };

        for listener in &listeners {
            let Ok(permit) = permits.clone().acquire_owned().await else {
                break;
            };
            let listener = Arc::clone(listener);
            let event = event.clone();

            in_flight.spawn(async move {
                let _permit = permit;
                if let Err(e) = listener.on_event(event.clone()).await {
                    log::error!("이벤트 리스너 {} 실패: {} (event: {:?})", listener.name(), e, event);
                }
            });
        }

        while let Some(finished) = in_flight.try_join_next() {
            if let Err(e) = finished {
                log::error!("이벤트 리스너 태스크 비정상 종료: {}", e);
            }
        }
    }

    while let Some(finished) = in_flight.join_next().await {
        if let Err(e) = finished {
            log::error!("이벤트 리스너 태스크 비정상 종료: {}", e);
        }
    }

    log::info!("📭 이벤트 디스패처 종료");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct Recorder {
        seen: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl EventListener<u32> for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        async fn on_event(&self, event: u32) -> AppResult<()> {
            self.seen.lock().unwrap().push(event);
            Ok(())
        }
    }

    struct AlwaysFails {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl EventListener<u32> for AlwaysFails {
        fn name(&self) -> &'static str {
            "always_fails"
        }

        async fn on_event(&self, _event: u32) -> AppResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::DatabaseError("boom".to_string()))
        }
    }

    struct Concurrency {
        current: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl EventListener<u32> for Concurrency {
        fn name(&self) -> &'static str {
            "concurrency"
        }

        async fn on_event(&self, _event: u32) -> AppResult<()> {
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.current.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_every_listener_receives_every_event() {
        let first = Arc::new(Recorder { seen: Mutex::new(Vec::new()) });
        let second = Arc::new(Recorder { seen: Mutex::new(Vec::new()) });
        let (publisher, dispatcher) =
            EventBus::start(vec![first.clone() as Arc<dyn EventListener<u32>>, second.clone()], 2);

        for n in 0..5 {
            publisher.publish(n).unwrap();
        }
        drop(publisher);
        dispatcher.join().await.unwrap();

        for recorder in [first, second] {
            let mut seen = recorder.seen.lock().unwrap().clone();
            seen.sort();
            assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        }
    }

    #[tokio::test]
    async fn test_listener_failure_is_not_reported_to_publisher() {
        let failing = Arc::new(AlwaysFails { calls: AtomicUsize::new(0) });
        let (publisher, dispatcher) = EventBus::start(vec![failing.clone() as Arc<dyn EventListener<u32>>], 1);

        assert!(publisher.publish(1).is_ok());
        assert!(publisher.publish(2).is_ok());
        drop(publisher);
        dispatcher.join().await.unwrap();

        assert_eq!(failing.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_worker_limit_caps_concurrency() {
        let listener = Arc::new(Concurrency {
            current: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        });
        let (publisher, dispatcher) = EventBus::start(vec![listener.clone() as Arc<dyn EventListener<u32>>], 2);

        for n in 0..10 {
            publisher.publish(n).unwrap();
        }
        drop(publisher);
        dispatcher.join().await.unwrap();

        assert!(listener.peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_shutdown_drains_queue_and_rejects_new_events() {
        let recorder = Arc::new(Recorder { seen: Mutex::new(Vec::new()) });
        let (publisher, dispatcher) = EventBus::start(vec![recorder.clone() as Arc<dyn EventListener<u32>>], 1);

        publisher.publish(7).unwrap();
        dispatcher.shutdown().await.unwrap();

        assert_eq!(*recorder.seen.lock().unwrap(), vec![7]);
        assert!(publisher.publish(8).is_err());
    }
}
