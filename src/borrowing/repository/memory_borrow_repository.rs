use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::borrowing::domain::model::BorrowEntity;
use crate::borrowing::repository::BorrowRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

pub(crate) const ALREADY_BORROWED: &str = "Book is already borrowed";
pub(crate) const NOT_BORROWED: &str = "Book is not borrowed";

// MemoryBorrowRepository keys borrow entries by book id, so a book is out at most once.
#[derive(Debug)]
pub(crate) struct MemoryBorrowRepository {
    borrowed: RwLock<BTreeMap<i64, BorrowEntity>>,
}

impl MemoryBorrowRepository {
    pub(crate) fn new(seed: Vec<BorrowEntity>) -> Self {
        Self {
            borrowed: RwLock::new(seed.into_iter().map(|b| (b.id(), b)).collect()),
        }
    }
}

#[async_trait]
impl Repository<BorrowEntity> for MemoryBorrowRepository {
    async fn create(&self, entity: &BorrowEntity) -> LibraryResult<usize> {
        match self.borrowed.write().await.entry(entity.id()) {
            Entry::Occupied(_) => Err(LibraryError::duplicate_key(ALREADY_BORROWED)),
            Entry::Vacant(slot) => {
                slot.insert(entity.clone());
                Ok(1)
            }
        }
    }

    async fn get(&self, id: i64) -> LibraryResult<BorrowEntity> {
        self.borrowed.read().await.get(&id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(NOT_BORROWED))
    }

    async fn find_all(&self) -> LibraryResult<Vec<BorrowEntity>> {
        Ok(self.borrowed.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl BorrowRepository for MemoryBorrowRepository {
    async fn delete(&self, id: i64) -> LibraryResult<BorrowEntity> {
        self.borrowed.write().await.remove(&id)
            .ok_or_else(|| LibraryError::not_found(NOT_BORROWED))
    }
}
