use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.create(&BookEntity::from(book)).await?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "book_added", "books", book.id.to_string().as_str(), &HashMap::new(), book)?).await?;
        Ok(book.clone())
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_title(title).await?;
        if res.is_empty() {
            return Err(LibraryError::not_found("No books found matching the title"));
        }
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn check_availability(&self, id: i64) -> LibraryResult<bool> {
        self.book_repository.get(id).await.map(|b| b.is_available())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.clone(),
            genre: other.genre.clone(),
            year: other.year.clone(),
            available: other.available,
            description: other.description.clone(),
            extra: other.extra.clone(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.clone(),
            genre: other.genre.clone(),
            year: other.year.clone(),
            available: other.available,
            description: other.description.clone(),
            extra: other.extra.clone(),
        }
    }
}
