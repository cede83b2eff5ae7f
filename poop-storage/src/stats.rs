//! Statistics queries over `poop_tracker`: counts, leaderboards, streaks, distributions, ranking.
//!
//! Everything is recomputed from the event table on each call. Calendar buckets come from the
//! stored UTC `timestamp` text via SQLite date functions.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::error::{Result, StorageError};
use crate::models::{
    DayCount, HourBucket, MonthKey, MonthlyCount, Period, PeriodFilter, RankOrder, Ranking,
    UserCount, WeekdayBucket,
};
use crate::poop_repo::{SqlitePoopRepository, LATEST_USERNAME};
use crate::streak::longest_streak;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub(crate) fn parse_day(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| StorageError::InvalidData(format!("bad date {:?}: {}", text, e)))
}

fn year_key(year: i32) -> String {
    PeriodFilter::year(year).key
}

impl SqlitePoopRepository {
    pub(crate) async fn count_global(&self, user_id: i64) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM poop_tracker WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count.0)
    }

    pub(crate) async fn count_in_month(&self, user_id: i64, month: MonthKey) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM poop_tracker WHERE user_id = ? AND strftime('%Y-%m', timestamp) = ?",
        )
        .bind(user_id)
        .bind(month.to_string())
        .fetch_one(self.pool_manager.pool())
        .await?;
        Ok(count.0)
    }

    pub(crate) async fn count_in_year(&self, user_id: i64, year: i32) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM poop_tracker WHERE user_id = ? AND strftime('%Y', timestamp) = ?",
        )
        .bind(user_id)
        .bind(year_key(year))
        .fetch_one(self.pool_manager.pool())
        .await?;
        Ok(count.0)
    }

    pub(crate) async fn breakdown_by_month(&self, user_id: i64) -> Result<Vec<MonthlyCount>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT strftime('%Y-%m', timestamp) AS month, COUNT(*) AS poop_count
            FROM poop_tracker
            WHERE user_id = ?
            GROUP BY month
            ORDER BY month
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool_manager.pool())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(year_month, count)| MonthlyCount { year_month, count })
            .collect())
    }

    pub(crate) async fn leaderboard(
        &self,
        period: Period,
        limit: Option<usize>,
        order: RankOrder,
    ) -> Result<Vec<UserCount>> {
        let filter = period.resolve(self.clock.today());
        let sql = format!(
            r#"
            SELECT {username} AS username, COUNT(*) AS poop_count
            FROM poop_tracker p
            WHERE {condition}
            GROUP BY p.user_id
            ORDER BY poop_count {order}, MAX(p.timestamp) ASC, p.user_id ASC
            LIMIT ?
            "#,
            username = LATEST_USERNAME,
            condition = filter.condition("p"),
            order = order.sql(),
        );
        // SQLite treats a negative LIMIT as "no limit".
        let limit = limit.map(|n| n as i64).unwrap_or(-1);

        let rows: Vec<(String, i64)> = sqlx::query_as(&sql)
            .bind(&filter.key)
            .bind(limit)
            .fetch_all(self.pool_manager.pool())
            .await?;

        debug!(period = %filter.key, rows = rows.len(), "Leaderboard computed");
        Ok(rows
            .into_iter()
            .map(|(username, count)| UserCount { username, count })
            .collect())
    }

    /// Distinct days with at least one event, ascending, optionally bounded (inclusive).
    pub(crate) async fn active_days(
        &self,
        user_id: i64,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<NaiveDate>> {
        let pool = self.pool_manager.pool();
        let rows: Vec<(String,)> = match bounds {
            Some((from, to)) => {
                sqlx::query_as(
                    r#"
                    SELECT DISTINCT date(timestamp) AS day
                    FROM poop_tracker
                    WHERE user_id = ? AND date(timestamp) BETWEEN ? AND ?
                    ORDER BY day
                    "#,
                )
                .bind(user_id)
                .bind(from.to_string())
                .bind(to.to_string())
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT DISTINCT date(timestamp) AS day FROM poop_tracker WHERE user_id = ? ORDER BY day",
                )
                .bind(user_id)
                .fetch_all(pool)
                .await?
            }
        };

        rows.iter().map(|(day,)| parse_day(day)).collect()
    }

    pub(crate) async fn count_days_without_event(&self, user_id: i64) -> Result<i64> {
        let today = self.clock.today();
        let start = NaiveDate::from_ymd_opt(today.year(), 1, 1)
            .ok_or_else(|| StorageError::InvalidData(format!("no January 1 in {}", today.year())))?;

        let calendar_days = (today - start).num_days() + 1;
        let active = self.active_days(user_id, Some((start, today))).await?;

        Ok(calendar_days - active.len() as i64)
    }

    pub(crate) async fn longest_user_streak(&self, user_id: i64) -> Result<i64> {
        let days = self.active_days(user_id, None).await?;
        Ok(longest_streak(&days))
    }

    pub(crate) async fn busiest_day(&self, user_id: i64) -> Result<DayCount> {
        let row: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT date(timestamp) AS day, COUNT(*) AS poop_count
            FROM poop_tracker
            WHERE user_id = ?
            GROUP BY day
            ORDER BY poop_count DESC, day ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        let (day, count) =
            row.ok_or_else(|| StorageError::NoData(format!("user {} has no events", user_id)))?;
        Ok(DayCount {
            day: parse_day(&day)?,
            count,
        })
    }

    pub(crate) async fn by_hour(&self, user_id: i64, year: i32) -> Result<Vec<HourBucket>> {
        let rows: Vec<(i64, i64)> = sqlx::query_as(
            r#"
            SELECT CAST(strftime('%H', timestamp) AS INTEGER) AS hour, COUNT(*) AS poop_count
            FROM poop_tracker
            WHERE user_id = ? AND strftime('%Y', timestamp) = ?
            GROUP BY hour
            "#,
        )
        .bind(user_id)
        .bind(year_key(year))
        .fetch_all(self.pool_manager.pool())
        .await?;

        let mut buckets: Vec<HourBucket> = (0..24).map(|hour| HourBucket { hour, count: 0 }).collect();
        for (hour, count) in rows {
            let slot = usize::try_from(hour)
                .ok()
                .and_then(|h| buckets.get_mut(h))
                .ok_or_else(|| StorageError::InvalidData(format!("hour out of range: {}", hour)))?;
            slot.count = count;
        }
        Ok(buckets)
    }

    pub(crate) async fn by_weekday(&self, user_id: i64, year: i32) -> Result<Vec<WeekdayBucket>> {
        // %w: 0 = Sunday .. 6 = Saturday
        let rows: Vec<(i64, i64)> = sqlx::query_as(
            r#"
            SELECT CAST(strftime('%w', timestamp) AS INTEGER) AS dow, COUNT(*) AS poop_count
            FROM poop_tracker
            WHERE user_id = ? AND strftime('%Y', timestamp) = ?
            GROUP BY dow
            "#,
        )
        .bind(user_id)
        .bind(year_key(year))
        .fetch_all(self.pool_manager.pool())
        .await?;

        let mut buckets: Vec<WeekdayBucket> = WEEK
            .iter()
            .map(|&weekday| WeekdayBucket { weekday, count: 0 })
            .collect();
        for (dow, count) in rows {
            if !(0..7).contains(&dow) {
                return Err(StorageError::InvalidData(format!("weekday out of range: {}", dow)));
            }
            let monday_based = ((dow + 6) % 7) as usize;
            buckets[monday_based].count = count;
        }
        Ok(buckets)
    }

    pub(crate) async fn rank_in_year(&self, user_id: i64, year: i32) -> Result<Ranking> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT p.user_id
            FROM poop_tracker p
            WHERE strftime('%Y', p.timestamp) = ?
            GROUP BY p.user_id
            ORDER BY COUNT(*) DESC, MAX(p.timestamp) ASC, p.user_id ASC
            "#,
        )
        .bind(year_key(year))
        .fetch_all(self.pool_manager.pool())
        .await?;

        let position = rows
            .iter()
            .position(|(id,)| *id == user_id)
            .ok_or_else(|| {
                StorageError::NoData(format!("user {} has no events in {}", user_id, year))
            })?;

        Ok(Ranking::new(position as i64 + 1, rows.len() as i64))
    }
}
