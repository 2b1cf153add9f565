use crate::error::BookError;
use crate::models::{Book, BookFilter, BookSummary, NewBook};
use std::future::Future;

pub trait BookRepo {
    fn list_books(
        &self,
        filter: BookFilter,
    ) -> impl Future<Output = Vec<BookSummary>> + Send;

    fn get_book(&self, id: &str) -> impl Future<Output = Result<Book, BookError>> + Send;

    /// Returns the generated ID of the new book
    fn insert_book(
        &self,
        new_book: NewBook,
    ) -> impl Future<Output = Result<String, BookError>> + Send;

    /// Input is validated before the ID is looked up, so a bad payload for an
    /// unknown ID reports the validation error
    fn update_book(
        &self,
        id: &str,
        new_book: NewBook,
    ) -> impl Future<Output = Result<Book, BookError>> + Send;

    fn delete_book(&self, id: &str) -> impl Future<Output = Result<(), BookError>> + Send;
}
