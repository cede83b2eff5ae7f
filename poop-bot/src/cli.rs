//! CLI parser, config loading and stats query building.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use poop_storage::{AwardKind, MonthKey, Period, RankOrder, StatsQuery};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "poopbot")]
#[command(about = "Poop tracker Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Open the database (DATABASE_URL) and run a health check.
    Health,
    /// Run one statistics query and print the result as JSON.
    Stats(StatsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryKind {
    GlobalCount,
    MonthlyCount,
    PeriodCount,
    MonthlyBreakdown,
    TopN,
    MonthlyLeaderboard,
    MonthlyPoodium,
    PastMonthPoodium,
    YearlyPoodium,
    BottomPoopers,
    DaysWithoutEvent,
    MaxStreak,
    DayWithMostEvents,
    YearCount,
    HourDistribution,
    WeekdayDistribution,
    YearlyRanking,
    GroupYearlyStats,
    GroupAwards,
    Award,
}

#[derive(Debug, Clone, Args)]
pub struct StatsArgs {
    #[arg(value_enum)]
    pub query: QueryKind,
    /// Telegram user id, for per-user queries.
    #[arg(short, long)]
    pub user: Option<i64>,
    /// Calendar year; defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,
    /// Month as YYYY-MM, for period-count and top-n.
    #[arg(short, long)]
    pub month: Option<String>,
    /// Award name, e.g. night-owl.
    #[arg(short, long)]
    pub kind: Option<String>,
    /// Row limit for top-n; all rows when omitted.
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Rank ascending (fewest first) for top-n.
    #[arg(long)]
    pub asc: bool,
}

impl StatsArgs {
    pub fn new(query: QueryKind) -> Self {
        Self {
            query,
            user: None,
            year: None,
            month: None,
            kind: None,
            limit: None,
            asc: false,
        }
    }

    fn user_id(&self) -> Result<i64> {
        self.user
            .with_context(|| format!("--user is required for {:?}", self.query))
    }

    fn month_key(&self) -> Result<Option<MonthKey>> {
        self.month
            .as_deref()
            .map(|m| m.parse::<MonthKey>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Maps parsed arguments onto the query catalog. `today` supplies the default year.
pub fn build_query(args: &StatsArgs, today: NaiveDate) -> Result<StatsQuery> {
    let year = args.year.unwrap_or_else(|| today.year());

    let query = match args.query {
        QueryKind::GlobalCount => StatsQuery::GlobalCount {
            user_id: args.user_id()?,
        },
        QueryKind::MonthlyCount => StatsQuery::MonthlyCount {
            user_id: args.user_id()?,
        },
        QueryKind::PeriodCount => StatsQuery::PeriodCount {
            user_id: args.user_id()?,
            month: args
                .month_key()?
                .context("--month is required for period-count")?,
        },
        QueryKind::MonthlyBreakdown => StatsQuery::MonthlyBreakdown {
            user_id: args.user_id()?,
        },
        QueryKind::TopN => {
            let period = match (args.month_key()?, args.year) {
                (Some(month), _) => Period::Month(month),
                (None, Some(year)) => Period::Year(year),
                (None, None) => Period::CurrentMonth,
            };
            let order = if args.asc {
                RankOrder::Asc
            } else {
                RankOrder::Desc
            };
            StatsQuery::TopN {
                period,
                limit: args.limit,
                order,
            }
        }
        QueryKind::MonthlyLeaderboard => StatsQuery::MonthlyLeaderboard,
        QueryKind::MonthlyPoodium => StatsQuery::MonthlyPoodium,
        QueryKind::PastMonthPoodium => StatsQuery::PastMonthPoodium,
        QueryKind::YearlyPoodium => StatsQuery::YearlyPoodium,
        QueryKind::BottomPoopers => StatsQuery::BottomPoopers,
        QueryKind::DaysWithoutEvent => StatsQuery::DaysWithoutEvent {
            user_id: args.user_id()?,
        },
        QueryKind::MaxStreak => StatsQuery::MaxStreak {
            user_id: args.user_id()?,
        },
        QueryKind::DayWithMostEvents => StatsQuery::DayWithMostEvents {
            user_id: args.user_id()?,
        },
        QueryKind::YearCount => StatsQuery::YearCount {
            user_id: args.user_id()?,
            year,
        },
        QueryKind::HourDistribution => StatsQuery::HourDistribution {
            user_id: args.user_id()?,
            year,
        },
        QueryKind::WeekdayDistribution => StatsQuery::WeekdayDistribution {
            user_id: args.user_id()?,
            year,
        },
        QueryKind::YearlyRanking => StatsQuery::YearlyRanking {
            user_id: args.user_id()?,
            year,
        },
        QueryKind::GroupYearlyStats => StatsQuery::GroupYearlyStats { year },
        QueryKind::GroupAwards => StatsQuery::GroupAwards { year },
        QueryKind::Award => {
            let kind: AwardKind = args
                .kind
                .as_deref()
                .context("--kind is required for award")?
                .parse()
                .map_err(anyhow::Error::msg)?;
            StatsQuery::Award { kind, year }
        }
    };
    Ok(query)
}
