//! Error types shared by the storage, batch and command layers.

use thiserror::Error;

/// The backend is unavailable or rejected a statement or transaction.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not prepare database location: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not find a data directory for the database")]
    NoDataDir,
}

/// Raw console input that cannot be split into (name, phone) pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInputError {
    #[error("invalid list: got {0} tokens, every name needs a phone")]
    OddTokenCount(usize),
}

/// A single field failed its format rule.
///
/// Bulk paths never raise this; they route the entry to the rejected list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("invalid phone number: {0:?} (expected optional '+' and 10-15 digits)")]
    Phone(String),

    #[error("invalid first name: {0:?} (expected 1-50 characters)")]
    FirstName(String),

    #[error("invalid last name: {0:?} (expected at most 50 characters)")]
    LastName(String),
}

/// A CSV import file could not be read.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("line {line}: {source}")]
    Row { line: u64, source: csv::Error },
}
