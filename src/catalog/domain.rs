pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
    async fn check_availability(&self, id: i64) -> LibraryResult<bool>;
}
