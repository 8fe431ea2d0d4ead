use crate::core::domain::Identifiable;

// BorrowEntity records that a book is currently out with a borrower.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct BorrowEntity {
    pub book_id: i64,
    pub borrower: String,
}

impl BorrowEntity {
    pub fn new(book_id: i64, borrower: &str) -> Self {
        Self {
            book_id,
            borrower: borrower.to_string(),
        }
    }
}

impl Identifiable for BorrowEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}
