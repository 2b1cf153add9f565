use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a freshly inserted book. The name must already have been validated.
    pub(crate) fn new(id: String, name: String, new_book: NewBook, now: DateTime<Utc>) -> Self {
        Book {
            id,
            name,
            year: new_book.year,
            author: new_book.author,
            summary: new_book.summary,
            publisher: new_book.publisher,
            page_count: new_book.page_count,
            read_page: new_book.read_page,
            finished: new_book.read_page == new_book.page_count,
            reading: new_book.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace everything except `id` and `inserted_at`
    pub(crate) fn replace(&mut self, name: String, new_book: NewBook, now: DateTime<Utc>) {
        self.name = name;
        self.year = new_book.year;
        self.author = new_book.author;
        self.summary = new_book.summary;
        self.publisher = new_book.publisher;
        self.page_count = new_book.page_count;
        self.read_page = new_book.read_page;
        self.finished = new_book.read_page == new_book.page_count;
        self.reading = new_book.reading;
        self.updated_at = now;
    }
}

// Payload for both create and update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBook {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        BookSummary {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Only one criterion is ever applied. When a request supplies several, the
/// name filter wins over reading, and reading wins over finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookFilter {
    #[default]
    All,
    /// Case-insensitive substring match on the name
    NameContains(String),
    Reading(bool),
    Finished(bool),
}

impl BookFilter {
    pub fn from_params(
        name: Option<String>,
        reading: Option<bool>,
        finished: Option<bool>,
    ) -> Self {
        if let Some(name) = name {
            BookFilter::NameContains(name)
        } else if let Some(reading) = reading {
            BookFilter::Reading(reading)
        } else if let Some(finished) = finished {
            BookFilter::Finished(finished)
        } else {
            BookFilter::All
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::NameContains(query) => book
                .name
                .to_lowercase()
                .contains(&query.to_lowercase()),
            BookFilter::Reading(reading) => book.reading == *reading,
            BookFilter::Finished(finished) => book.finished == *finished,
        }
    }
}
