//! Bot abstraction for outgoing actions.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in the bot crate. Tests substitute
//! a recording implementation.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

#[async_trait]
pub trait Bot: Send + Sync {
    /// Sets a single emoji reaction on a message in the given chat.
    async fn react(&self, chat: &Chat, message_id: i64, emoji: &str) -> Result<()>;
}
