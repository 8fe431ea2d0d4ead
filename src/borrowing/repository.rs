pub mod memory_borrow_repository;

use async_trait::async_trait;
use crate::borrowing::domain::model::BorrowEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BorrowRepository: Repository<BorrowEntity> {
    // removes and returns the entry, NotFound if the book is not borrowed
    async fn delete(&self, id: i64) -> LibraryResult<BorrowEntity>;
}
