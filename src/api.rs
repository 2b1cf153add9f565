use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::BookError;
use crate::models::{Book, BookFilter, BookSummary, NewBook};
use crate::repo::BookRepo;

#[derive(Clone)]
struct AppState<R> {
    repo: R,
}

/// The `{status, message, data}` body every endpoint responds with
#[derive(Serialize)]
struct Envelope<T> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

type Reply<T> = (StatusCode, Json<Envelope<T>>);
type Failure = (StatusCode, Json<Envelope<()>>);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InsertedBook {
    book_id: String,
}

#[derive(Serialize)]
struct BookList {
    books: Vec<BookSummary>,
}

#[derive(Serialize)]
struct SingleBook {
    book: Book,
}

#[derive(Debug, Default, Deserialize)]
struct ListBooksQuery {
    name: Option<String>,
    reading: Option<String>,
    finished: Option<String>,
}

impl From<ListBooksQuery> for BookFilter {
    fn from(query: ListBooksQuery) -> Self {
        BookFilter::from_params(
            query.name,
            query.reading.as_deref().map(parse_flag),
            query.finished.as_deref().map(parse_flag),
        )
    }
}

pub fn build_app<R>(repo: R) -> Router
where
    R: BookRepo + Send + Sync + Clone + 'static,
{
    Router::new()
        .route("/books", get(list_books::<R>).post(insert_book::<R>))
        .route(
            "/books/{id}",
            get(get_book::<R>)
                .put(update_book::<R>)
                .delete(delete_book::<R>),
        )
        .with_state(AppState { repo })
}

async fn list_books<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<ListBooksQuery>,
) -> Reply<BookList>
where
    R: BookRepo + Send + Sync + Clone,
{
    let filter = BookFilter::from(query);
    let books = state.repo.list_books(filter).await;

    info!("Retrieved {} books from the store", books.len());

    success(StatusCode::OK, None, Some(BookList { books }))
}

async fn get_book<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Reply<SingleBook>, Failure>
where
    R: BookRepo,
{
    match state.repo.get_book(&id).await {
        Ok(book) => {
            info!("Retrieved book from the store: {:?}", book);
            Ok(success(StatusCode::OK, None, Some(SingleBook { book })))
        }
        Err(err) => {
            info!("No book found in the store with ID: {}", id);
            Err((status_for(&err), fail("Book not found".to_string())))
        }
    }
}

async fn insert_book<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<Reply<InsertedBook>, Failure>
where
    R: BookRepo,
{
    let new_book = decode_payload("Failed to add book", payload)?;

    let book_id = state
        .repo
        .insert_book(new_book)
        .await
        .map_err(|err| failure("Failed to add book", err))?;

    info!("Inserted book into the store with ID: {}", book_id);

    Ok(success(
        StatusCode::CREATED,
        Some("Book added successfully"),
        Some(InsertedBook { book_id }),
    ))
}

async fn update_book<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<Reply<()>, Failure>
where
    R: BookRepo,
{
    let new_book = decode_payload("Failed to update book", payload)?;

    let book = state
        .repo
        .update_book(&id, new_book)
        .await
        .map_err(|err| failure("Failed to update book", err))?;

    info!("Updated book in the store: {:?}", book);

    Ok(success(StatusCode::OK, Some("Book updated successfully"), None))
}

async fn delete_book<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Reply<()>, Failure>
where
    R: BookRepo,
{
    state
        .repo
        .delete_book(&id)
        .await
        .map_err(|err| failure("Failed to delete book", err))?;

    info!("Deleted book from the store with ID: {}", id);

    Ok(success(StatusCode::OK, Some("Book deleted successfully"), None))
}

fn success<T>(code: StatusCode, message: Option<&str>, data: Option<T>) -> Reply<T> {
    (
        code,
        Json(Envelope {
            status: "success",
            message: message.map(str::to_string),
            data,
        }),
    )
}

fn fail(message: String) -> Json<Envelope<()>> {
    Json(Envelope {
        status: "fail",
        message: Some(message),
        data: None,
    })
}

/// Build a failure response for an error raised by the store, prefixed with
/// what the request was trying to do
fn failure(action: &str, err: BookError) -> Failure {
    info!("{}: {}", action, err);
    (status_for(&err), fail(format!("{action}. {err}")))
}

/// Bodies that are not JSON, or do not fit `NewBook` (negative or null
/// counts, a non-string name), are answered with a 400 in the usual envelope
fn decode_payload(
    action: &str,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<NewBook, Failure> {
    match payload {
        Ok(Json(new_book)) => Ok(new_book),
        Err(rejection) => {
            info!("{}: rejected payload: {}", action, rejection);
            Err((
                StatusCode::BAD_REQUEST,
                fail(format!("{action}. {}", rejection.body_text())),
            ))
        }
    }
}

fn status_for(err: &BookError) -> StatusCode {
    match err {
        BookError::MissingName | BookError::InvalidProgress => StatusCode::BAD_REQUEST,
        BookError::NotFound(_) => StatusCode::NOT_FOUND,
        BookError::InsertFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `'0'` means false, any other present value means true
fn parse_flag(value: &str) -> bool {
    value != "0"
}
