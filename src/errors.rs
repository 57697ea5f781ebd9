//! Unified application error type.
//! All modules (store, roster, core, cli, export) return AppError to keep
//! the error handling consistent and easy to manage.
//!
//! Unparseable dates and roster lookup misses are NOT errors: they surface
//! as `None`/empty derived values and the caller degrades gracefully.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month key (expected YYYY-MM): {0}")]
    InvalidMonthKey(String),

    // ---------------------------
    // Roster / cache
    // ---------------------------
    #[error("Roster import error: {0}")]
    RosterImport(String),

    #[error("Roster cache unavailable: {0}")]
    Cache(String),

    // ---------------------------
    // Document store
    // ---------------------------
    #[error("Document store error: {0}")]
    Store(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Batch of {got} operations exceeds the store limit of {limit}")]
    BatchTooLarge { got: usize, limit: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
