use std::collections::BTreeMap;
use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::borrowing::domain::BorrowingService;
use crate::borrowing::dto::BorrowDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBorrowedCommand {
    borrowing_service: Arc<dyn BorrowingService>,
}

impl ListBorrowedCommand {
    pub(crate) fn new(borrowing_service: Arc<dyn BorrowingService>) -> Self {
        Self {
            borrowing_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListBorrowedCommandRequest {}

// Serialized as a bare id to borrower object.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ListBorrowedCommandResponse {
    pub borrowed: BTreeMap<i64, String>,
}

impl ListBorrowedCommandResponse {
    pub fn new(borrows: Vec<BorrowDto>) -> Self {
        Self {
            borrowed: borrows.into_iter().map(|b| (b.book_id, b.borrower)).collect(),
        }
    }
}

#[async_trait]
impl Command<ListBorrowedCommandRequest, ListBorrowedCommandResponse> for ListBorrowedCommand {
    async fn execute(&self, _req: ListBorrowedCommandRequest) -> Result<ListBorrowedCommandResponse, CommandError> {
        self.borrowing_service.borrowed_books()
            .await.map_err(CommandError::from).map(ListBorrowedCommandResponse::new)
    }
}
