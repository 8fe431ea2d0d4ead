use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use crate::borrowing::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest, BorrowBookCommandResponse};
use crate::borrowing::command::borrow_status_cmd::{BorrowStatusCommand, BorrowStatusCommandRequest, BorrowStatusCommandResponse};
use crate::borrowing::command::list_borrowed_cmd::{ListBorrowedCommand, ListBorrowedCommandRequest, ListBorrowedCommandResponse};
use crate::borrowing::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::borrowing::domain::BorrowingService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{health, json_to_server_error, AppState, ErrorField, ServerError};

pub(crate) type BorrowingState = AppState<dyn BorrowingService>;

pub(crate) fn build_router(state: BorrowingState) -> Router {
    Router::new()
        .route("/borrowed", get(list_borrowed))
        .route("/borrowed/:book_id", get(borrow_status))
        .route("/borrow", post(borrow_book))
        .route("/return", post(return_book))
        .route("/health", get(health::<dyn BorrowingService>))
        .with_state(state)
}

// The borrowing service reports every error under "detail".
fn detail(err: CommandError) -> ServerError {
    ServerError::from(err).with_field(ErrorField::Detail)
}

fn parse_body<T: serde::de::DeserializeOwned>(json: Result<Json<Value>, JsonRejection>) -> Result<T, ServerError> {
    let Json(value) = json.map_err(|rejection| ServerError::new(
        StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text().as_str()).with_field(ErrorField::Detail))?;
    serde_json::from_value(value).map_err(|err| json_to_server_error(err).with_field(ErrorField::Detail))
}

pub(crate) async fn list_borrowed(
    State(state): State<BorrowingState>) -> Result<Json<ListBorrowedCommandResponse>, ServerError> {
    let res = ListBorrowedCommand::new(state.service)
        .execute(ListBorrowedCommandRequest::default()).await.map_err(detail)?;
    Ok(Json(res))
}

pub(crate) async fn borrow_status(
    State(state): State<BorrowingState>,
    Path(book_id): Path<String>) -> Result<Json<BorrowStatusCommandResponse>, ServerError> {
    let book_id = book_id.parse::<i64>().map_err(|_| ServerError::new(
        StatusCode::UNPROCESSABLE_ENTITY, "book_id must be an integer").with_field(ErrorField::Detail))?;
    let res = BorrowStatusCommand::new(state.service)
        .execute(BorrowStatusCommandRequest::new(book_id)).await.map_err(detail)?;
    Ok(Json(res))
}

pub(crate) async fn borrow_book(
    State(state): State<BorrowingState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<BorrowBookCommandResponse>, ServerError> {
    let req: BorrowBookCommandRequest = parse_body(json)?;
    let res = BorrowBookCommand::new(state.service).execute(req).await.map_err(detail)?;
    Ok(Json(res))
}

pub(crate) async fn return_book(
    State(state): State<BorrowingState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = parse_body(json)?;
    let res = ReturnBookCommand::new(state.service).execute(req).await.map_err(detail)?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use crate::borrowing;
    use crate::catalog;
    use crate::core::domain::{AvailabilityVia, Configuration};
    use crate::core::server::spawn_test_server;

    async fn start_borrowing(config: Configuration) -> String {
        spawn_test_server(borrowing::app(&config).expect("should build app")).await
    }

    async fn start_fixed_borrowing() -> String {
        start_borrowing(Configuration { availability: AvailabilityVia::Fixed, ..Configuration::borrowing() }).await
    }

    async fn get_json(url: String) -> (StatusCode, Value) {
        let res = reqwest::get(url).await.expect("should call borrowing");
        let status = res.status();
        (status, res.json().await.expect("should return json"))
    }

    async fn post_json(url: String, body: Value) -> (StatusCode, Value) {
        let res = reqwest::Client::new().post(url).json(&body).send().await.expect("should call borrowing");
        let status = res.status();
        (status, res.json().await.expect("should return json"))
    }

    #[tokio::test]
    async fn test_should_list_seeded_borrows() {
        let base = start_fixed_borrowing().await;
        let (status, body) = get_json(format!("{}/borrowed", base)).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"1": "Alice", "2": "Bob"}), body);
    }

    #[tokio::test]
    async fn test_should_borrow_and_return() {
        let base = start_fixed_borrowing().await;
        let (status, body) = post_json(format!("{}/borrow", base), json!({"book_id": 3, "borrower": "Carol"})).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"message": "Book ID 3 successfully borrowed by Carol"}), body);

        let (status, body) = get_json(format!("{}/borrowed/3", base)).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"borrowed": true, "borrower": "Carol"}), body);

        let (status, body) = post_json(format!("{}/return", base), json!({"book_id": 3})).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"message": "Book ID 3 successfully returned by Carol"}), body);

        let (_, body) = get_json(format!("{}/borrowed/3", base)).await;
        assert_eq!(json!({"borrowed": false}), body);

        let (status, body) = post_json(format!("{}/return", base), json!({"book_id": 3})).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!(json!({"detail": "Book is not borrowed"}), body);
    }

    #[tokio::test]
    async fn test_should_accept_numeric_text_ids() {
        let base = start_fixed_borrowing().await;
        let (status, body) = post_json(format!("{}/borrow", base), json!({"book_id": "3", "borrower": "Carol"})).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"message": "Book ID 3 successfully borrowed by Carol"}), body);

        let (status, body) = post_json(format!("{}/return", base), json!({"book_id": "3"})).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"message": "Book ID 3 successfully returned by Carol"}), body);

        let (status, body) = post_json(format!("{}/return", base), json!({"book_id": "3a"})).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_should_reject_unavailable_and_unknown() {
        let base = start_fixed_borrowing().await;
        for borrower in ["Carol", "Alice"] {
            let (status, body) = post_json(format!("{}/borrow", base), json!({"book_id": 1, "borrower": borrower})).await;
            assert_eq!(StatusCode::BAD_REQUEST, status);
            assert_eq!(json!({"detail": "Book is not available for borrowing"}), body);
        }

        let (status, body) = post_json(format!("{}/borrow", base), json!({"book_id": 5, "borrower": "Carol"})).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"detail": "Book not found in book-service"}), body);
    }

    #[tokio::test]
    async fn test_should_reject_double_borrow() {
        let base = start_fixed_borrowing().await;
        let (status, _) = post_json(format!("{}/borrow", base), json!({"book_id": 4, "borrower": "Carol"})).await;
        assert_eq!(StatusCode::OK, status);
        let (status, body) = post_json(format!("{}/borrow", base), json!({"book_id": 4, "borrower": "Dave"})).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!(json!({"detail": "Book is already borrowed"}), body);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_body() {
        let base = start_fixed_borrowing().await;
        let (status, body) = post_json(format!("{}/borrow", base), json!({"book_id": "three"})).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
        assert!(body["detail"].is_string());

        let (status, body) = post_json(format!("{}/return", base), json!({})).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
        assert!(body["detail"].is_string());

        let res = reqwest::Client::new().post(format!("{}/borrow", base))
            .header("content-type", "application/json")
            .body("{not json").send().await.expect("should call borrowing");
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, res.status());

        let (status, body) = get_json(format!("{}/borrowed/abc", base)).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
        assert_eq!(json!({"detail": "book_id must be an integer"}), body);
    }

    #[tokio::test]
    async fn test_should_borrow_against_catalog() {
        let catalog_base = spawn_test_server(catalog::app(&Configuration::catalog())).await;
        let base = start_borrowing(Configuration { catalog_url: catalog_base, ..Configuration::borrowing() }).await;

        let (status, _) = post_json(format!("{}/borrow", base), json!({"book_id": 7, "borrower": "Carol"})).await;
        assert_eq!(StatusCode::OK, status);

        let (status, body) = post_json(format!("{}/borrow", base), json!({"book_id": 8, "borrower": "Carol"})).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!(json!({"detail": "Book is not available for borrowing"}), body);

        let (status, body) = post_json(format!("{}/borrow", base), json!({"book_id": 11, "borrower": "Carol"})).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"detail": "Book not found in book-service"}), body);

        // the catalog lists book 1 as available, but Alice already has it
        let (status, body) = post_json(format!("{}/borrow", base), json!({"book_id": 1, "borrower": "Carol"})).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!(json!({"detail": "Book is already borrowed"}), body);

        let (_, body) = get_json(format!("{}/borrowed", base)).await;
        assert_eq!(json!({"1": "Alice", "2": "Bob", "7": "Carol"}), body);
    }

    #[tokio::test]
    async fn test_should_report_unreachable_catalog() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("should bind");
        let addr = listener.local_addr().expect("should have addr");
        drop(listener);
        let base = start_borrowing(Configuration {
            catalog_url: format!("http://{}", addr),
            catalog_timeout: Duration::from_secs(1),
            ..Configuration::borrowing()
        }).await;

        let (status, body) = post_json(format!("{}/borrow", base), json!({"book_id": 3, "borrower": "Carol"})).await;
        assert_eq!(StatusCode::SERVICE_UNAVAILABLE, status);
        assert!(body["detail"].is_string());

        let (_, body) = get_json(format!("{}/borrowed", base)).await;
        assert_eq!(json!({"1": "Alice", "2": "Bob"}), body);
    }

    #[tokio::test]
    async fn test_should_report_health() {
        let base = start_fixed_borrowing().await;
        let (status, body) = get_json(format!("{}/health", base)).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"status": "ok", "service": "borrowing", "version": env!("CARGO_PKG_VERSION")}), body);
    }
}
