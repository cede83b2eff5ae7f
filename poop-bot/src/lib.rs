//! # Poop tracker bot
//!
//! Wires the handler chain, handlers, storage and the Telegram transport. Loads config from env and
//! runs the REPL; the CLI also exposes a storage health check and the statistics catalog.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use chain::HandlerChain;
pub use cli::{build_query, load_config, Cli, Commands, QueryKind, StatsArgs};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{
    database_url_from_env, BaseConfig, BotConfig, ChatRole, ChatRouting, Mood, StickerMoods,
};
pub use handlers::{ChatFilterHandler, LoggingHandler, PoopHandler, ReactionHandler};
pub use runner::{run_bot, run_health, run_stats};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
