//! Entry points behind the CLI subcommands: run the bot, check storage health, print one statistic.

use anyhow::Result;
use poop_core::init_tracing;
use poop_storage::{PoopRepository, SqlitePoopRepository, StatsQuery, StatsReport};
use tracing::{info, instrument};

use crate::cli::{build_query, StatsArgs};
use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::telegram::run_repl;

/// Main entry: validate config, init logging, open storage, build the chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        database_url = %config.database_url(),
        group_chat_id = config.group_chat_id(),
        admin_chat_id = ?config.admin_chat_id(),
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    components.repo.health_check().await?;

    let handler_chain = build_handler_chain(
        &config,
        components.repo.clone(),
        components.bot_adapter.clone(),
    );

    info!("Bot started successfully");

    run_repl(components.teloxide_bot, handler_chain).await
}

/// Opens the database and runs the health check.
pub async fn run_health(database_url: &str) -> Result<()> {
    let repo = SqlitePoopRepository::new(database_url).await?;
    repo.health_check().await?;
    Ok(())
}

/// Runs one catalog query against `repo`, resolving defaults (current year) from the repo's clock.
pub async fn run_stats(repo: &dyn PoopRepository, args: &StatsArgs) -> Result<StatsReport> {
    let query: StatsQuery = build_query(args, repo.today())?;
    Ok(query.execute(repo).await?)
}
