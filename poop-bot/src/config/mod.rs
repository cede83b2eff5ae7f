//! Bot configuration: BaseConfig (Telegram + log + DB) + chat routing + mood stickers.

mod base;
mod bot_config;
mod chats;
mod stickers;


pub use base::{
    database_url_from_env, log_file_from_env, BaseConfig, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILE,
};
pub use bot_config::BotConfig;
pub use chats::{ChatRole, ChatRouting};
pub use stickers::{Mood, StickerMoods, DEFAULT_STICKER_SET};
