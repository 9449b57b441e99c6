use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{Value};
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::get_books_cmd::{GetBooksCommand, GetBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub(crate) fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(get_books).post(add_book))
        .route("/books/:isbn",
               get(find_book_by_isbn).put(update_book).delete(remove_book))
        .with_state(state)
}

pub(crate) async fn get_books(
    State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let res = GetBooksCommand::new(state.service).execute(GetBooksCommandRequest::new()).await?;
    Ok(Json(res.books))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<BookDto>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(state.service).execute(req).await?;
    Ok(Json(res.book))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<BookDto>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.service).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res.book)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Json<Value>) -> Result<Json<BookDto>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    // the path isbn is authoritative for the stored record
    req.isbn = isbn;
    let res = UpdateBookCommand::new(state.service).execute(req).await?;
    Ok(Json(res.book))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let _ = RemoveBookCommand::new(state.service).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
