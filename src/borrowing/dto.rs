use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BorrowDto is a single book id to borrower entry of the borrowing store.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BorrowDto {
    pub book_id: i64,
    pub borrower: String,
}

impl BorrowDto {
    pub fn new(book_id: i64, borrower: &str) -> Self {
        Self {
            book_id,
            borrower: borrower.to_string(),
        }
    }
}

impl Identifiable for BorrowDto {
    fn id(&self) -> i64 {
        self.book_id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::borrowing::dto::BorrowDto;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_borrow() {
        let borrow = BorrowDto::new(3, "Carol");
        assert_eq!(3, borrow.id());
        assert_eq!(json!({"book_id": 3, "borrower": "Carol"}), serde_json::to_value(&borrow).expect("should serialize"));
    }
}
