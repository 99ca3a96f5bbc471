//! Error type shared by the storage layer and the library helpers.
//!
//! Every fallible library function returns [`TrackerResult`]. Command handlers
//! convert these into `anyhow::Error` with `?` and add user-facing context
//! through the message macros.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// A requested or supplied column is not part of the table schema.
    /// Raised while building a query, before storage is touched.
    #[error("Column '{column}' does not exist in table '{table}'")]
    UnknownColumn { table: String, column: String },

    #[error("Column '{column}' is declared more than once in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    /// Every value of an update record was null, leaving nothing to `SET`.
    #[error("Nothing to update in table '{table}'")]
    EmptyUpdate { table: String },

    #[error("Record for table '{table}' has no value for column '{column}'")]
    MissingValue { table: String, column: String },

    /// A stored value does not fit the field it maps to, e.g. a negative
    /// duration.
    #[error("Invalid value '{value}' in column '{column}' of table '{table}'")]
    InvalidValue { table: String, column: String, value: String },

    /// Driver or connection failure, passed through untouched.
    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Invalid time format: {0}")]
    Format(String),

    #[error("No record with id '{id}' in table '{table}'")]
    NotFound { table: String, id: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Timer error: {0}")]
    Timer(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

impl TrackerError {
    pub fn unknown_column(table: &str, column: &str) -> Self {
        TrackerError::UnknownColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    pub fn not_found(table: &str, id: &str) -> Self {
        TrackerError::NotFound {
            table: table.to_string(),
            id: id.to_string(),
        }
    }
}
