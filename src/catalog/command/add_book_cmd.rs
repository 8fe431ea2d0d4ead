use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};

const REQUIRED_FIELDS: [&str; 3] = ["id", "title", "available"];

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) book: BookDto,
}

impl AddBookCommandRequest {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl TryFrom<Value> for AddBookCommandRequest {
    type Error = LibraryError;

    fn try_from(value: Value) -> LibraryResult<Self> {
        let complete = value.as_object()
            .map(|fields| REQUIRED_FIELDS.iter().all(|k| fields.contains_key(*k)))
            .unwrap_or(false);
        if !complete {
            return Err(LibraryError::validation(
                "Invalid data. Required fields: id, title, available", Some("400".to_string())));
        }
        let book: BookDto = serde_json::from_value(value).map_err(|err| LibraryError::validation(
            format!("Invalid data. {}", err).as_str(), Some("400".to_string())))?;
        Ok(Self::new(book))
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
