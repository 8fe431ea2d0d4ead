use std::sync::Arc;
use crate::borrowing::availability::AvailabilityChecker;
use crate::borrowing::availability::catalog_checker::CatalogAvailabilityChecker;
use crate::borrowing::availability::fixed_checker::FixedAvailabilityChecker;
use crate::borrowing::domain::BorrowingService;
use crate::borrowing::domain::model::BorrowEntity;
use crate::borrowing::domain::service::BorrowingServiceImpl;
use crate::borrowing::repository::BorrowRepository;
use crate::borrowing::repository::memory_borrow_repository::MemoryBorrowRepository;
use crate::core::domain::{AvailabilityVia, Configuration};
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_publisher;

pub(crate) fn seed_borrows() -> Vec<BorrowEntity> {
    vec![
        BorrowEntity::new(1, "Alice"),
        BorrowEntity::new(2, "Bob"),
    ]
}

pub(crate) fn create_borrow_repository() -> Box<dyn BorrowRepository> {
    Box::new(MemoryBorrowRepository::new(seed_borrows()))
}

pub(crate) fn create_availability_checker(config: &Configuration) -> LibraryResult<Box<dyn AvailabilityChecker>> {
    match config.availability {
        AvailabilityVia::Catalog => {
            let checker = CatalogAvailabilityChecker::new(config.catalog_url.as_str(), config.catalog_timeout)?;
            Ok(Box::new(checker))
        }
        AvailabilityVia::Fixed => {
            Ok(Box::new(FixedAvailabilityChecker::new()))
        }
    }
}

pub(crate) fn create_borrowing_service(config: &Configuration) -> LibraryResult<Arc<dyn BorrowingService>> {
    let borrow_repo = create_borrow_repository();
    let checker = create_availability_checker(config)?;
    let publisher = create_publisher(config);
    Ok(Arc::new(BorrowingServiceImpl::new(config, borrow_repo, checker, publisher)))
}
