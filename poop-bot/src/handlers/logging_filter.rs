//! Handlers for logging and chat filtering.

use async_trait::async_trait;
use poop_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

use crate::config::ChatRouting;

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = ?message.user_id(),
            chat_id = message.chat.id,
            username = %message
                .user
                .as_ref()
                .and_then(|u| u.username.as_deref())
                .unwrap_or("unknown"),
            message_content = %message.content,
            sticker = message.sticker.is_some(),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}

/// Stops the chain for chats that are neither the group chat nor the admin chat.
pub struct ChatFilterHandler {
    chats: ChatRouting,
}

impl ChatFilterHandler {
    pub fn new(chats: ChatRouting) -> Self {
        Self { chats }
    }
}

#[async_trait]
impl Handler for ChatFilterHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let listened = self.chats.role(message.chat.id).is_some();
        if !listened {
            debug!(chat_id = message.chat.id, "Ignoring message from unknown chat");
        }
        Ok(listened)
    }
}
