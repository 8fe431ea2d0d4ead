use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the catalog as an ordered sequence; lookups are linear scans.
#[derive(Debug)]
pub(crate) struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(
                format!("Book with ID {} already exists", entity.id()).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        self.books.read().await.iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found("Book not found"))
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_title(&self, fragment: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.iter()
            .filter(|b| b.title_contains(fragment))
            .cloned()
            .collect())
    }
}
