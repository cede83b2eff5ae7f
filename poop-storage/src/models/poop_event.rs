//! Poop event model for persistence.
//!
//! Maps to the `poop_tracker` table. [`NewPoopEvent`] is the write side (no id yet);
//! [`PoopEvent`] is a stored row.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text layout of the `timestamp` column. Lexicographic order equals chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored event. Never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PoopEvent {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub message_id: i64,
    pub timestamp: NaiveDateTime,
    pub created_at_unix: i64,
}

/// An event about to be appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPoopEvent {
    pub user_id: i64,
    pub username: String,
    pub message_id: i64,
    pub timestamp: NaiveDateTime,
    pub created_at_unix: i64,
}

impl NewPoopEvent {
    /// Builds an event from the instant the message was sent. Both time columns derive from `sent_at`.
    pub fn new(user_id: i64, username: impl Into<String>, message_id: i64, sent_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            username: username.into(),
            message_id,
            timestamp: sent_at.naive_utc(),
            created_at_unix: sent_at.timestamp(),
        }
    }

    /// Builds an event from epoch seconds, truncating nothing but sub-second precision.
    pub fn from_unix(user_id: i64, username: impl Into<String>, message_id: i64, unix: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(unix, 0).map(|t| Self::new(user_id, username, message_id, t))
    }

    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
