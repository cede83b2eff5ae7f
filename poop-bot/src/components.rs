//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use poop_core::Bot as CoreBot;
use poop_storage::{PoopRepository, SqlitePoopRepository};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::handlers::{ChatFilterHandler, LoggingHandler, PoopHandler, ReactionHandler};
use crate::telegram::TelegramBotAdapter;

/// Dependencies for run_bot, produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub repo: Arc<dyn PoopRepository>,
    pub teloxide_bot: Bot,
    pub bot_adapter: Arc<dyn CoreBot>,
}

/// Opens the database and builds the teloxide client (pointed at TELEGRAM_API_URL when set).
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let repo = SqlitePoopRepository::new(config.database_url())
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url(),
                "Failed to initialize poop storage"
            );
            anyhow::anyhow!("Failed to initialize poop storage: {}", e)
        })?;

    let teloxide_bot = {
        let bot = Bot::new(config.bot_token());
        match config.telegram_api_url() {
            Some(url_str) => {
                let url = reqwest::Url::parse(url_str).map_err(|e| {
                    anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e)
                })?;
                info!(url = %url, "Using custom Telegram API URL");
                bot.set_api_url(url)
            }
            None => bot,
        }
    };

    let bot_adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    Ok(BotComponents {
        repo: Arc::new(repo),
        teloxide_bot,
        bot_adapter,
    })
}

/// Builds the handler chain (logging → chat filter → reaction → poop).
pub fn build_handler_chain(
    config: &BotConfig,
    repo: Arc<dyn PoopRepository>,
    bot: Arc<dyn CoreBot>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(ChatFilterHandler::new(config.chats)))
        .add_handler(Arc::new(ReactionHandler::new(bot)))
        .add_handler(Arc::new(PoopHandler::new(
            repo,
            config.chats,
            config.stickers.clone(),
        )))
}
