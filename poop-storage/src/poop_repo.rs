//! Poop repository: persistence of poop events and the SQLite implementation of [`PoopRepository`].
//!
//! Uses SqlitePoolManager for the pool. Statistics queries live in `stats` and `awards`; this
//! module owns the schema and the write path.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::clock::{Clock, SystemClock};
use crate::error::{map_insert_error, Result};
use crate::models::{
    Award, AwardKind, DayCount, HourBucket, MonthKey, MonthlyCount, NewPoopEvent, Period,
    PoopEvent, RankOrder, Ranking, UserCount, WeekdayBucket,
};
use crate::repository::PoopRepository;
use crate::sqlite_pool::SqlitePoolManager;

/// Most recent display name of `p.user_id`; used wherever results are reported per user.
pub(crate) const LATEST_USERNAME: &str = "(SELECT u.username FROM poop_tracker u \
     WHERE u.user_id = p.user_id ORDER BY u.timestamp DESC, u.id DESC LIMIT 1)";

#[derive(Clone)]
pub struct SqlitePoopRepository {
    pub(crate) pool_manager: SqlitePoolManager,
    pub(crate) clock: Arc<dyn Clock>,
}

impl SqlitePoopRepository {
    /// Opens (creating if needed) the database and its schema, using the system clock.
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_clock(database_url, Arc::new(SystemClock)).await
    }

    /// Like [`SqlitePoopRepository::new`] with an explicit clock for relative periods.
    pub async fn with_clock(database_url: &str, clock: Arc<dyn Clock>) -> Result<Self> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self {
            pool_manager,
            clock,
        };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<()> {
        info!("Creating poop_tracker table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS poop_tracker (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                username TEXT NOT NULL,
                message_id INTEGER UNIQUE NOT NULL,
                timestamp TEXT NOT NULL,
                created_at_unix INTEGER NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_poop_tracker_user_id ON poop_tracker(user_id);
            CREATE INDEX IF NOT EXISTS idx_poop_tracker_timestamp ON poop_tracker(timestamp);
            "#,
        )
        .execute(pool)
        .await?;

        info!("poop_tracker table ready");
        Ok(())
    }
}

#[async_trait]
impl PoopRepository for SqlitePoopRepository {
    #[instrument(skip(self, event), fields(user_id = event.user_id, message_id = event.message_id))]
    async fn append(&self, event: &NewPoopEvent) -> Result<()> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO poop_tracker (user_id, username, message_id, timestamp, created_at_unix)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(event.user_id)
        .bind(&event.username)
        .bind(event.message_id)
        .bind(event.timestamp_text())
        .bind(event.created_at_unix)
        .execute(pool)
        .await
        .map_err(|e| map_insert_error(e, event.message_id))?;

        info!(
            username = %event.username,
            timestamp = %event.timestamp_text(),
            "Logged poop"
        );
        Ok(())
    }

    async fn event_by_message_id(&self, message_id: i64) -> Result<Option<PoopEvent>> {
        let pool = self.pool_manager.pool();

        let event = sqlx::query_as::<_, PoopEvent>(
            "SELECT id, user_id, username, message_id, timestamp, created_at_unix \
             FROM poop_tracker WHERE message_id = ?",
        )
        .bind(message_id)
        .fetch_optional(pool)
        .await?;

        debug!(message_id, found = event.is_some(), "Looked up event by message id");
        Ok(event)
    }

    async fn health_check(&self) -> Result<()> {
        self.pool_manager.ping().await
    }

    fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    async fn global_count(&self, user_id: i64) -> Result<i64> {
        self.count_global(user_id).await
    }

    async fn period_count(&self, user_id: i64, month: MonthKey) -> Result<i64> {
        self.count_in_month(user_id, month).await
    }

    async fn monthly_breakdown(&self, user_id: i64) -> Result<Vec<MonthlyCount>> {
        self.breakdown_by_month(user_id).await
    }

    async fn top_n(
        &self,
        period: Period,
        limit: Option<usize>,
        order: RankOrder,
    ) -> Result<Vec<UserCount>> {
        self.leaderboard(period, limit, order).await
    }

    async fn days_without_event(&self, user_id: i64) -> Result<i64> {
        self.count_days_without_event(user_id).await
    }

    async fn max_streak(&self, user_id: i64) -> Result<i64> {
        self.longest_user_streak(user_id).await
    }

    async fn day_with_most_events(&self, user_id: i64) -> Result<DayCount> {
        self.busiest_day(user_id).await
    }

    async fn year_count(&self, user_id: i64, year: i32) -> Result<i64> {
        self.count_in_year(user_id, year).await
    }

    async fn hour_distribution(&self, user_id: i64, year: i32) -> Result<Vec<HourBucket>> {
        self.by_hour(user_id, year).await
    }

    async fn weekday_distribution(&self, user_id: i64, year: i32) -> Result<Vec<WeekdayBucket>> {
        self.by_weekday(user_id, year).await
    }

    async fn yearly_ranking(&self, user_id: i64, year: i32) -> Result<Ranking> {
        self.rank_in_year(user_id, year).await
    }

    async fn group_yearly_stats(&self, year: i32) -> Result<Vec<UserCount>> {
        self.leaderboard(Period::Year(year), None, RankOrder::Desc)
            .await
    }

    async fn award(&self, kind: AwardKind, year: i32) -> Result<Option<Award>> {
        self.evaluate_award(kind, year).await
    }
}
