use async_trait::async_trait;
use crate::core::library::LibraryResult;

pub mod catalog_checker;
pub mod fixed_checker;

pub(crate) const BOOK_NOT_FOUND: &str = "Book not found in book-service";

#[async_trait]
pub(crate) trait AvailabilityChecker: Sync + Send {
    // Ok(flag) for a known book, NotFound for an unknown one.
    async fn check_availability(&self, book_id: i64) -> LibraryResult<bool>;
}
