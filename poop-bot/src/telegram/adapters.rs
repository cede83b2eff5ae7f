use poop_core::{Chat, Message, Sticker, ToCoreMessage, ToCoreUser, User};

/// Telegram user → core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram message → core message, including sticker and forward origin.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        Message {
            id: msg.id.0 as i64,
            user: msg.from.as_ref().map(|u| TelegramUserWrapper(u).to_core()),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            content: msg.text().unwrap_or("").to_string(),
            sticker: msg.sticker().map(|s| Sticker {
                emoji: s.emoji.clone(),
                set_name: s.set_name.clone(),
                file_unique_id: s.file.unique_id.to_string(),
            }),
            created_at: msg.date,
            forward_from: msg.forward_from_user().map(|u| TelegramUserWrapper(u).to_core()),
            forward_date: msg.forward_date(),
            is_forward: msg.forward_origin().is_some(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_group() {
            "group"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }
}
