//! # 판매 도서 정산 리스너
//!
//! 구매 완료 이벤트를 받아 구매된 도서를 `SOLD`로 바꿉니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::events::PurchaseCompleted;
use crate::events::bus::EventListener;
use crate::services::books::BookSettlement;

pub struct UpdateSoldBookListener {
    settlement: Arc<dyn BookSettlement>,
}

impl UpdateSoldBookListener {
    pub fn new(settlement: Arc<dyn BookSettlement>) -> Self {
        Self { settlement }
    }
}

#[async_trait]
impl EventListener<PurchaseCompleted> for UpdateSoldBookListener {
    fn name(&self) -> &'static str {
        "update_sold_book"
    }

    async fn on_event(&self, event: PurchaseCompleted) -> AppResult<()> {
        log::debug!(
            "구매 {} 정산: 도서 {:?}",
            event.purchase_id,
            event.book_ids
        );
        self.settlement.mark_sold(&event.book_ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{CallJournal, RecordingSettlement};

    #[tokio::test]
    async fn test_marks_purchased_books_sold() {
        let journal = CallJournal::default();
        let listener = UpdateSoldBookListener::new(Arc::new(RecordingSettlement::new(journal.clone())));

        listener
            .on_event(PurchaseCompleted {
                purchase_id: "p1".to_string(),
                customer_id: "c1".to_string(),
                book_ids: vec!["b1".to_string(), "b2".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(journal.entries(), vec!["mark_sold:b1,b2".to_string()]);
    }
}
