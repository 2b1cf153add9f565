use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// The payload had no name, or an empty one
    MissingName,
    /// readPage was greater than pageCount
    InvalidProgress,
    NotFound(String),
    /// The record could not be found again straight after being appended
    InsertFailure(String),
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::MissingName => write!(f, "Please provide the book name"),
            BookError::InvalidProgress => {
                write!(f, "readPage must not be greater than pageCount")
            }
            BookError::NotFound(_) => write!(f, "Id not found"),
            BookError::InsertFailure(id) => write!(f, "Book {id} could not be stored"),
        }
    }
}

impl Error for BookError {}
