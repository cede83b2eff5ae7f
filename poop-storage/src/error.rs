//! Storage error types.
//!
//! Returned by every [`crate::PoopRepository`] operation. The store never retries; callers decide
//! what a failure means to the chat.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The message id was already logged. Callers treat this as "already recorded".
    #[error("Duplicate event: message_id {message_id} is already logged")]
    DuplicateEvent { message_id: i64 },
    #[error("Database error: {0}")]
    Database(String),
    /// A ranking or a single day was requested for a user with no qualifying events.
    #[error("No data: {0}")]
    NoData(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl StorageError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StorageError::DuplicateEvent { .. })
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

/// Maps an insert failure, turning a unique violation on `message_id` into [`StorageError::DuplicateEvent`].
pub(crate) fn map_insert_error(e: sqlx::Error, message_id: i64) -> StorageError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return StorageError::DuplicateEvent { message_id };
        }
    }
    StorageError::Database(e.to_string())
}

pub type Result<T> = std::result::Result<T, StorageError>;
