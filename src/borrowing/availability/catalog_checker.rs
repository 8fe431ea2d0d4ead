use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};
use crate::borrowing::availability::{AvailabilityChecker, BOOK_NOT_FOUND};
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    available: bool,
}

// CatalogAvailabilityChecker asks the catalog service's check-availability endpoint.
#[derive(Debug)]
pub(crate) struct CatalogAvailabilityChecker {
    client: Client,
    base_url: String,
}

impl CatalogAvailabilityChecker {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> LibraryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AvailabilityChecker for CatalogAvailabilityChecker {
    async fn check_availability(&self, book_id: i64) -> LibraryResult<bool> {
        let url = format!("{}/books/check-availability/{}", self.base_url, book_id);
        debug!(%url, "checking availability with catalog");
        let res = self.client.get(url.as_str()).send().await?;
        match res.status() {
            StatusCode::OK => {
                let body: AvailabilityResponse = res.json().await?;
                Ok(body.available)
            }
            StatusCode::NOT_FOUND => {
                Err(LibraryError::not_found(BOOK_NOT_FOUND))
            }
            status => {
                warn!(%url, %status, "unexpected catalog response");
                Err(LibraryError::unavailable(
                    format!("catalog service answered {} for book {}", status, book_id).as_str(),
                    Some(status.as_u16().to_string()), status.is_server_error()))
            }
        }
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            warn!(%err, "catalog service unreachable");
            LibraryError::unavailable(
                format!("catalog service unreachable: {}", err).as_str(), None, true)
        } else if err.is_decode() {
            LibraryError::runtime(
                format!("unreadable catalog response: {}", err).as_str(), None)
        } else {
            LibraryError::runtime(
                format!("catalog client error: {}", err).as_str(), None)
        }
    }
}
