//! BotConfig: BaseConfig + chat routing + mood stickers. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, ChatRouting, StickerMoods};

pub struct BotConfig {
    pub base: BaseConfig,
    pub chats: ChatRouting,
    pub stickers: StickerMoods,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let chats = ChatRouting::from_env()?;
        let stickers = StickerMoods::from_env();
        Ok(Self {
            base,
            chats,
            stickers,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if self.stickers.set_name.trim().is_empty() {
            anyhow::bail!("STICKER_SET is empty");
        }
        Ok(())
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn group_chat_id(&self) -> i64 {
        self.chats.group_chat_id
    }
    pub fn admin_chat_id(&self) -> Option<i64> {
        self.chats.admin_chat_id
    }
}
