//! 구매 데이터 액세스 계층

pub mod in_memory_purchase_repo;
pub mod purchase_repo;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::purchases::Purchase;

pub use in_memory_purchase_repo::InMemoryPurchaseRepository;
pub use purchase_repo::MongoPurchaseRepository;

#[async_trait]
pub trait PurchaseStore: Send + Sync {
    /// 새 구매를 저장하고 ID가 할당된 구매를 반환합니다.
    async fn save(&self, purchase: Purchase) -> AppResult<Purchase>;

    async fn find_by_customer(&self, customer_id: &str) -> AppResult<Vec<Purchase>>;
}
