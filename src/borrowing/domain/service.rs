use std::collections::HashMap;
use async_trait::async_trait;
use crate::borrowing::availability::AvailabilityChecker;
use crate::borrowing::domain::BorrowingService;
use crate::borrowing::domain::model::BorrowEntity;
use crate::borrowing::dto::BorrowDto;
use crate::borrowing::repository::BorrowRepository;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub(crate) const NOT_AVAILABLE: &str = "Book is not available for borrowing";

pub(crate) struct BorrowingServiceImpl {
    borrow_repository: Box<dyn BorrowRepository>,
    availability_checker: Box<dyn AvailabilityChecker>,
    events_publisher: Box<dyn EventPublisher>,
}

impl BorrowingServiceImpl {
    pub(crate) fn new(_config: &Configuration, borrow_repository: Box<dyn BorrowRepository>,
                      availability_checker: Box<dyn AvailabilityChecker>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            borrow_repository,
            availability_checker,
            events_publisher,
        }
    }
}

// Conflicts on the borrowing store are client errors, not duplicate keys.
fn to_bad_request(err: LibraryError) -> LibraryError {
    match err {
        LibraryError::DuplicateKey { message } | LibraryError::NotFound { message } => {
            LibraryError::validation(message.as_str(), Some("400".to_string()))
        }
        other => other,
    }
}

#[async_trait]
impl BorrowingService for BorrowingServiceImpl {
    async fn borrowed_books(&self) -> LibraryResult<Vec<BorrowDto>> {
        let res = self.borrow_repository.find_all().await?;
        Ok(res.iter().map(BorrowDto::from).collect())
    }

    async fn borrow(&self, book_id: i64, borrower: &str) -> LibraryResult<BorrowDto> {
        // no store lock is held while the checker runs
        if !self.availability_checker.check_availability(book_id).await? {
            return Err(LibraryError::validation(NOT_AVAILABLE, Some("400".to_string())));
        }
        let borrow = BorrowDto::new(book_id, borrower);
        self.borrow_repository.create(&BorrowEntity::from(&borrow)).await.map_err(to_bad_request)?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "book_borrowed", "borrowing", book_id.to_string().as_str(),
            &HashMap::from([("borrower".to_string(), borrower.to_string())]), &borrow)?).await?;
        Ok(borrow)
    }

    async fn return_book(&self, book_id: i64) -> LibraryResult<BorrowDto> {
        let removed = self.borrow_repository.delete(book_id).await.map_err(to_bad_request)?;
        let borrow = BorrowDto::from(&removed);
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "book_returned", "borrowing", book_id.to_string().as_str(),
            &HashMap::from([("borrower".to_string(), borrow.borrower.to_string())]), &borrow)?).await?;
        Ok(borrow)
    }

    async fn borrow_status(&self, book_id: i64) -> LibraryResult<Option<BorrowDto>> {
        match self.borrow_repository.get(book_id).await {
            Ok(existing) => Ok(Some(BorrowDto::from(&existing))),
            Err(LibraryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl From<&BorrowEntity> for BorrowDto {
    fn from(other: &BorrowEntity) -> Self {
        Self {
            book_id: other.book_id,
            borrower: other.borrower.to_string(),
        }
    }
}

impl From<&BorrowDto> for BorrowEntity {
    fn from(other: &BorrowDto) -> Self {
        Self {
            book_id: other.book_id,
            borrower: other.borrower.to_string(),
        }
    }
}
