use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::borrowing::domain::BorrowingService;
use crate::borrowing::dto::BorrowDto;
use crate::core::command::{Command, CommandError};
use crate::utils::number::lax_int;

pub(crate) struct BorrowBookCommand {
    borrowing_service: Arc<dyn BorrowingService>,
}

impl BorrowBookCommand {
    pub(crate) fn new(borrowing_service: Arc<dyn BorrowingService>) -> Self {
        Self {
            borrowing_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BorrowBookCommandRequest {
    #[serde(deserialize_with = "lax_int::deserialize")]
    book_id: i64,
    borrower: String,
}

impl BorrowBookCommandRequest {
    pub fn new(book_id: i64, borrower: &str) -> Self {
        Self {
            book_id,
            borrower: borrower.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BorrowBookCommandResponse {
    message: String,
}

impl BorrowBookCommandResponse {
    pub fn new(borrow: BorrowDto) -> Self {
        Self {
            message: format!("Book ID {} successfully borrowed by {}", borrow.book_id, borrow.borrower),
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.borrowing_service.borrow(req.book_id, req.borrower.as_str())
            .await.map_err(CommandError::from).map(BorrowBookCommandResponse::new)
    }
}
