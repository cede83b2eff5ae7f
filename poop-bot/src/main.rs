//! poopbot binary: run the bot, check the database, or print a statistic.

use anyhow::Result;
use clap::Parser;
use poop_bot::{database_url_from_env, load_config, run_bot, run_health, run_stats, Cli, Commands};
use poop_storage::SqlitePoopRepository;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Health => {
            let database_url = database_url_from_env();
            run_health(&database_url).await?;
            println!("ok: {}", database_url);
            Ok(())
        }
        Commands::Stats(args) => {
            let repo = SqlitePoopRepository::new(&database_url_from_env()).await?;
            let report = run_stats(&repo, &args).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}
