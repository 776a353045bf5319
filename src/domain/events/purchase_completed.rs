use serde::{Deserialize, Serialize};

/// 구매 완료 이벤트
///
/// `PurchaseService`가 구매를 저장한 뒤 발행하고,
/// `UpdateSoldBookListener`가 받아 구매된 도서를 `SOLD`로 바꿉니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseCompleted {
    pub purchase_id: String,
    pub customer_id: String,
    pub book_ids: Vec<String>,
}
