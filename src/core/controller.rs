use std::sync::Arc;
use axum::http::StatusCode;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

// AppState is shared by all handlers of a service; the service owns the in-memory store.
pub(crate) struct AppState<Svc: ?Sized> {
    pub(crate) config: Configuration,
    pub(crate) service: Arc<Svc>,
}

impl<Svc: ?Sized> AppState<Svc> {
    pub fn new(config: &Configuration, service: Arc<Svc>) -> AppState<Svc> {
        AppState {
            config: config.clone(),
            service,
        }
    }
}

impl<Svc: ?Sized> Clone for AppState<Svc> {
    fn clone(&self) -> Self {
        AppState {
            config: self.config.clone(),
            service: Arc::clone(&self.service),
        }
    }
}

pub(crate) async fn health<Svc: ?Sized + Send + Sync + 'static>(
    State(state): State<AppState<Svc>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": state.config.service_name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ErrorField is the json key an error message is reported under.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum ErrorField {
    Error,
    Detail,
}

impl ErrorField {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorField::Error => "error",
            ErrorField::Detail => "detail",
        }
    }
}

#[derive(Debug)]
pub(crate) struct ServerError {
    pub(crate) status: StatusCode,
    pub(crate) field: ErrorField,
    pub(crate) message: String,
}

impl ServerError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        ServerError {
            status,
            field: ErrorField::Error,
            message: message.to_string(),
        }
    }

    pub fn with_field(self, field: ErrorField) -> Self {
        ServerError { field, ..self }
    }
}

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::new(StatusCode::UNPROCESSABLE_ENTITY, format!("{}", err).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::DuplicateKey { .. } => {
                StatusCode::CONFLICT
            }
            CommandError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            CommandError::Runtime { retryable: true, .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            CommandError::Runtime { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CommandError::Serialization { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CommandError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        ServerError::new(status, err.message())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        } else {
            tracing::debug!(status = %self.status, message = %self.message, "request rejected");
        }
        let mut body = Map::new();
        body.insert(self.field.as_str().to_string(), Value::String(self.message));
        (self.status, Json(Value::Object(body))).into_response()
    }
}
