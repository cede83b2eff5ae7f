//! Storage crate: poop event persistence and the statistics engine built on it.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – PoopEvent, periods, aggregate results, awards
//! - [`repository`] – PoopRepository trait (the contract used by the bot)
//! - [`poop_repo`] – SqlitePoopRepository (schema + append)
//! - `stats` / `awards` – aggregation and award queries
//! - [`streak`] – contiguous-day streak detection
//! - [`query`] – StatsQuery catalog
//! - [`sqlite_pool`] – SqlitePoolManager

mod awards;
mod clock;
mod error;
mod models;
mod poop_repo;
mod query;
mod repository;
mod sqlite_pool;
mod stats;
mod streak;

#[cfg(test)]
mod poop_repo_test;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, StorageError};
pub use models::{
    Award, AwardKind, AwardValue, DayCount, HourBucket, MonthKey, MonthlyCount, NewPoopEvent,
    Period, PeriodFilter, PoopEvent, RankOrder, Ranking, UserCount, WeekdayBucket,
    TIMESTAMP_FORMAT,
};
pub use poop_repo::SqlitePoopRepository;
pub use query::{StatsQuery, StatsReport};
pub use repository::{PoopRepository, PODIUM_SIZE};
pub use sqlite_pool::{SqlitePoolManager, HEALTH_CHECK_TIMEOUT};
pub use streak::longest_streak;
