use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::borrowing::domain::BorrowingService;
use crate::borrowing::dto::BorrowDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct BorrowStatusCommand {
    borrowing_service: Arc<dyn BorrowingService>,
}

impl BorrowStatusCommand {
    pub(crate) fn new(borrowing_service: Arc<dyn BorrowingService>) -> Self {
        Self {
            borrowing_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct BorrowStatusCommandRequest {
    book_id: i64,
}

impl BorrowStatusCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct BorrowStatusCommandResponse {
    pub borrowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower: Option<String>,
}

impl BorrowStatusCommandResponse {
    pub fn new(borrow: Option<BorrowDto>) -> Self {
        Self {
            borrowed: borrow.is_some(),
            borrower: borrow.map(|b| b.borrower),
        }
    }
}

#[async_trait]
impl Command<BorrowStatusCommandRequest, BorrowStatusCommandResponse> for BorrowStatusCommand {
    async fn execute(&self, req: BorrowStatusCommandRequest) -> Result<BorrowStatusCommandResponse, CommandError> {
        self.borrowing_service.borrow_status(req.book_id)
            .await.map_err(CommandError::from).map(BorrowStatusCommandResponse::new)
    }
}
