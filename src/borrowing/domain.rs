use async_trait::async_trait;
use crate::borrowing::dto::BorrowDto;
use crate::core::library::LibraryResult;

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait BorrowingService: Sync + Send {
    async fn borrowed_books(&self) -> LibraryResult<Vec<BorrowDto>>;
    async fn borrow(&self, book_id: i64, borrower: &str) -> LibraryResult<BorrowDto>;
    async fn return_book(&self, book_id: i64) -> LibraryResult<BorrowDto>;
    async fn borrow_status(&self, book_id: i64) -> LibraryResult<Option<BorrowDto>>;
}
