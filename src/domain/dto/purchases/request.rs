//! 구매 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::purchases::PurchaseOrder;
use crate::utils::string_utils::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostPurchaseRequest {
    #[validate(custom(function = "validate_not_blank", message = "Customer must be informed"))]
    pub customer_id: String,

    #[validate(length(min = 1, message = "At least one book must be informed"))]
    pub book_ids: Vec<String>,
}

impl From<PostPurchaseRequest> for PurchaseOrder {
    fn from(request: PostPurchaseRequest) -> Self {
        Self {
            customer_id: request.customer_id,
            book_ids: request.book_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_book_list_is_rejected() {
        let request = PostPurchaseRequest {
            customer_id: "507f1f77bcf86cd799439011".to_string(),
            book_ids: vec![],
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("book_ids"));
    }
}
