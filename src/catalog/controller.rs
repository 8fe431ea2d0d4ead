use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::check_availability_cmd::{CheckAvailabilityCommand, CheckAvailabilityCommandRequest, CheckAvailabilityCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{health, AppState, ServerError};

pub(crate) type CatalogState = AppState<dyn CatalogService>;

pub(crate) fn build_router(state: CatalogState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/search", get(search_books))
        .route("/books/check-availability/:id", get(check_availability))
        .route("/books/:id", get(find_book_by_id))
        .route("/health", get(health::<dyn CatalogService>))
        .with_state(state)
}

// Ids that are not integers can never match a record.
fn parse_book_id(book_id: &str) -> Result<i64, ServerError> {
    book_id.parse::<i64>().map_err(|_| ServerError::new(StatusCode::NOT_FOUND, "Book not found"))
}

pub(crate) async fn list_books(
    State(state): State<CatalogState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.service).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<CatalogState>,
    Path(book_id): Path<String>) -> Result<Json<BookDto>, ServerError> {
    let req = GetBookCommandRequest::new(parse_book_id(book_id.as_str())?);
    let res = GetBookCommand::new(state.service).execute(req).await?;
    Ok(Json(res.book))
}

pub(crate) async fn search_books(
    State(state): State<CatalogState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let res = SearchBooksCommand::new(state.service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn check_availability(
    State(state): State<CatalogState>,
    Path(book_id): Path<String>) -> Result<Json<CheckAvailabilityCommandResponse>, ServerError> {
    let req = CheckAvailabilityCommandRequest::new(parse_book_id(book_id.as_str())?);
    let res = CheckAvailabilityCommand::new(state.service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<CatalogState>,
    json: Json<Value>) -> Result<(StatusCode, Json<BookDto>), ServerError> {
    let req = AddBookCommandRequest::try_from(json.0).map_err(CommandError::from)?;
    let res = AddBookCommand::new(state.service).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res.book)))
}
