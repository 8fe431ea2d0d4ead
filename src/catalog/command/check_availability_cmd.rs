use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct CheckAvailabilityCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl CheckAvailabilityCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct CheckAvailabilityCommandRequest {
    pub(crate) book_id: i64,
}

impl CheckAvailabilityCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct CheckAvailabilityCommandResponse {
    pub available: bool,
}

impl CheckAvailabilityCommandResponse {
    pub fn new(available: bool) -> Self {
        Self {
            available,
        }
    }
}

#[async_trait]
impl Command<CheckAvailabilityCommandRequest, CheckAvailabilityCommandResponse> for CheckAvailabilityCommand {
    async fn execute(&self, req: CheckAvailabilityCommandRequest) -> Result<CheckAvailabilityCommandResponse, CommandError> {
        self.catalog_service.check_availability(req.book_id)
            .await.map_err(CommandError::from).map(CheckAvailabilityCommandResponse::new)
    }
}
