//! Core types: user, chat, sticker, message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The emoji that counts as a logged event, as text or as a sticker's emoji.
pub const POOP_EMOJI: &str = "💩";

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name stored with each event: the @handle, else the first name, else the numeric id.
    pub fn display_name(&self) -> String {
        self.username
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.first_name.as_deref().filter(|s| !s.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Chat identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    pub emoji: Option<String>,
    pub set_name: Option<String>,
    pub file_unique_id: String,
}

/// A single incoming message. `forward_from` / `forward_date` are set for forwards whose
/// original sender is visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    /// None for messages sent on behalf of a chat (channel posts, anonymous admins).
    pub user: Option<User>,
    pub chat: Chat,
    pub content: String,
    pub sticker: Option<Sticker>,
    pub created_at: DateTime<Utc>,
    pub forward_from: Option<User>,
    pub forward_date: Option<DateTime<Utc>>,
    /// True for any forward, including ones with a hidden sender.
    pub is_forward: bool,
}

impl Message {
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    /// Text is exactly the poop emoji, or the sticker's emoji is.
    pub fn is_poop(&self) -> bool {
        self.content == POOP_EMOJI
            || self
                .sticker
                .as_ref()
                .and_then(|s| s.emoji.as_deref())
                .map_or(false, |e| e == POOP_EMOJI)
    }
}

/// Handler result for the chain. `React(emoji)` carries the reaction so later handlers can send it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing to react with.
    Stop,
    /// Stop the chain and attach the reaction emoji for the handled message.
    React(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/React → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or React to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
