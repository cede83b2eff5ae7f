//! Handler that turns qualifying messages into stored events.

use std::sync::Arc;

use async_trait::async_trait;
use poop_core::{BotError, Handler, HandlerError, HandlerResponse, Message, Result};
use poop_storage::{NewPoopEvent, PoopRepository};
use tracing::{debug, error, info, instrument, warn};

use crate::config::{ChatRole, ChatRouting, StickerMoods};

/// Builds the event for a qualifying message in a listened chat.
///
/// Group messages belong to their sender. Admin-chat forwards belong to the original sender, keyed
/// by the negated message id and dated at the original send time.
pub fn event_for(message: &Message, role: ChatRole) -> std::result::Result<NewPoopEvent, HandlerError> {
    match role {
        ChatRole::Group => {
            let sender = message.user.as_ref().ok_or(HandlerError::MissingSender)?;
            Ok(NewPoopEvent::new(
                sender.id,
                sender.display_name(),
                message.id,
                message.created_at,
            ))
        }
        ChatRole::Admin => {
            let sender = message
                .forward_from
                .as_ref()
                .ok_or(HandlerError::HiddenForwardSender)?;
            let sent_at = message.forward_date.ok_or(HandlerError::MissingForwardDate)?;
            Ok(NewPoopEvent::new(
                sender.id,
                sender.display_name(),
                -message.id,
                sent_at,
            ))
        }
    }
}

/// Appends one event per qualifying message and answers with the reaction to send.
#[derive(Clone)]
pub struct PoopHandler {
    repo: Arc<dyn PoopRepository>,
    chats: ChatRouting,
    stickers: StickerMoods,
}

impl PoopHandler {
    pub fn new(repo: Arc<dyn PoopRepository>, chats: ChatRouting, stickers: StickerMoods) -> Self {
        Self {
            repo,
            chats,
            stickers,
        }
    }
}

#[async_trait]
impl Handler for PoopHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_poop() {
            return Ok(HandlerResponse::Continue);
        }
        let Some(role) = self.chats.role(message.chat.id) else {
            return Ok(HandlerResponse::Continue);
        };
        if role == ChatRole::Admin && !message.is_forward {
            return Ok(HandlerResponse::Continue);
        }

        let event = match event_for(message, role) {
            Ok(event) => event,
            Err(HandlerError::MissingSender) => {
                debug!("Ignoring poop posted on behalf of a chat");
                return Ok(HandlerResponse::Continue);
            }
            Err(e) => {
                warn!(error = %e, "Skipping forwarded message");
                return Ok(HandlerResponse::Stop);
            }
        };

        match self.repo.append(&event).await {
            Ok(()) => {
                info!(
                    user_id = event.user_id,
                    username = %event.username,
                    event_message_id = event.message_id,
                    "New poop logged"
                );
            }
            Err(e) if e.is_duplicate() => {
                info!(event_message_id = event.message_id, "Poop already logged");
            }
            Err(e) => {
                error!(error = %e, user_id = event.user_id, "Failed to log poop");
                return Err(BotError::Database(e.to_string()));
            }
        }

        let emoji = self.stickers.reaction_for(message.sticker.as_ref());
        Ok(HandlerResponse::React(emoji.to_string()))
    }
}
