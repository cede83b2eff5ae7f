//! Which chats the bot listens to: the group chat and an optional admin chat for back-filling forwards.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// Events are attributed to the sender.
    Group,
    /// Forwarded events are attributed to the original sender.
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatRouting {
    /// GROUP_CHAT_ID
    pub group_chat_id: i64,
    /// MY_CHAT_ID
    pub admin_chat_id: Option<i64>,
}

impl ChatRouting {
    pub fn new(group_chat_id: i64, admin_chat_id: Option<i64>) -> Self {
        Self {
            group_chat_id,
            admin_chat_id,
        }
    }

    pub fn from_env() -> Result<Self> {
        let group = env::var("GROUP_CHAT_ID").context("GROUP_CHAT_ID not set")?;
        let group_chat_id = group
            .trim()
            .parse()
            .with_context(|| format!("GROUP_CHAT_ID is not an integer: {}", group))?;

        let admin_chat_id = match env::var("MY_CHAT_ID") {
            Ok(s) if !s.trim().is_empty() => Some(
                s.trim()
                    .parse()
                    .with_context(|| format!("MY_CHAT_ID is not an integer: {}", s))?,
            ),
            _ => None,
        };

        Ok(Self::new(group_chat_id, admin_chat_id))
    }

    /// Group wins if both ids are the same chat.
    pub fn role(&self, chat_id: i64) -> Option<ChatRole> {
        if chat_id == self.group_chat_id {
            Some(ChatRole::Group)
        } else if self.admin_chat_id == Some(chat_id) {
            Some(ChatRole::Admin)
        } else {
            None
        }
    }
}
