//! Sends the reaction chosen by an earlier handler. Runs in after() so it sees the final response.

use std::sync::Arc;

use async_trait::async_trait;
use poop_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct ReactionHandler {
    bot: Arc<dyn Bot>,
}

impl ReactionHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for ReactionHandler {
    /// Reaction failures are logged and never fail the chain.
    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let HandlerResponse::React(emoji) = response else {
            return Ok(());
        };

        match self.bot.react(&message.chat, message.id, emoji).await {
            Ok(()) => info!(chat_id = message.chat.id, message_id = message.id, emoji = %emoji, "Reaction added"),
            Err(e) => warn!(error = %e, chat_id = message.chat.id, message_id = message.id, "Failed to add reaction"),
        }
        Ok(())
    }
}
