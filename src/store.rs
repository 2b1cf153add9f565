use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::error::BookError;
use crate::models::{Book, BookFilter, BookSummary, NewBook};
use crate::repo::BookRepo;

/// In-memory book collection, kept in insertion order.
///
/// Clones share the same collection. Every operation holds the lock for its
/// whole duration, so a read-then-write never interleaves with another one.
#[derive(Clone, Default)]
pub struct BookStore {
    books: Arc<Mutex<Vec<Book>>>,
}

impl BookStore {
    pub fn new() -> Self {
        BookStore::default()
    }
}

#[cfg(test)]
impl BookStore {
    pub(crate) async fn len(&self) -> usize {
        self.books.lock().await.len()
    }

    pub(crate) async fn is_empty(&self) -> bool {
        self.books.lock().await.is_empty()
    }
}

/// Checks shared by insert and update. Returns the validated name.
fn validate(new_book: &NewBook) -> Result<String, BookError> {
    let name = match new_book.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(BookError::MissingName),
    };

    if new_book.read_page > new_book.page_count {
        return Err(BookError::InvalidProgress);
    }

    Ok(name)
}

impl BookRepo for BookStore {
    async fn list_books(&self, filter: BookFilter) -> Vec<BookSummary> {
        let books = self.books.lock().await;

        let summaries: Vec<BookSummary> = books
            .iter()
            .filter(|book| filter.matches(book))
            .map(BookSummary::from)
            .collect();

        debug!(
            "{} of {} books matched filter {:?}",
            summaries.len(),
            books.len(),
            filter
        );

        summaries
    }

    async fn get_book(&self, id: &str) -> Result<Book, BookError> {
        let books = self.books.lock().await;

        books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }

    async fn insert_book(&self, new_book: NewBook) -> Result<String, BookError> {
        let name = validate(&new_book)?;
        let id = Uuid::new_v4().to_string();

        let mut books = self.books.lock().await;
        books.push(Book::new(id.clone(), name, new_book, Utc::now()));

        if !books.iter().any(|book| book.id == id) {
            return Err(BookError::InsertFailure(id));
        }

        debug!("Collection now holds {} books", books.len());

        Ok(id)
    }

    async fn update_book(&self, id: &str, new_book: NewBook) -> Result<Book, BookError> {
        let name = validate(&new_book)?;

        let mut books = self.books.lock().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;

        book.replace(name, new_book, Utc::now());

        Ok(book.clone())
    }

    async fn delete_book(&self, id: &str) -> Result<(), BookError> {
        let mut books = self.books.lock().await;

        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;
        books.remove(index);

        debug!("Collection now holds {} books", books.len());

        Ok(())
    }
}
