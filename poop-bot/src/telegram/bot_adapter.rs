//! Wraps teloxide::Bot and implements [`poop_core::Bot`]. Tests substitute another Bot impl.

use async_trait::async_trait;
use poop_core::{Bot as CoreBot, BotError, Chat, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ReactionType},
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn telegram_message_id(message_id: i64) -> Result<MessageId> {
    i32::try_from(message_id)
        .map(MessageId)
        .map_err(|_| BotError::Bot(format!("message_id out of range: {}", message_id)))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn react(&self, chat: &Chat, message_id: i64, emoji: &str) -> Result<()> {
        let id = telegram_message_id(message_id)?;
        self.bot
            .set_message_reaction(ChatId(chat.id), id)
            .reaction(vec![ReactionType::Emoji {
                emoji: emoji.to_string(),
            }])
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
