use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::borrowing::domain::BorrowingService;
use crate::borrowing::dto::BorrowDto;
use crate::core::command::{Command, CommandError};
use crate::utils::number::lax_int;

pub(crate) struct ReturnBookCommand {
    borrowing_service: Arc<dyn BorrowingService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(borrowing_service: Arc<dyn BorrowingService>) -> Self {
        Self {
            borrowing_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    #[serde(deserialize_with = "lax_int::deserialize")]
    book_id: i64,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    message: String,
}

impl ReturnBookCommandResponse {
    pub fn new(borrow: BorrowDto) -> Self {
        Self {
            message: format!("Book ID {} successfully returned by {}", borrow.book_id, borrow.borrower),
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.borrowing_service.return_book(req.book_id)
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
