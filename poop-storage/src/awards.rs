//! Yearly award evaluation. Each [`AwardKind`] has its own predicate; winners with a zero value
//! are not awarded.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::models::{Award, AwardKind, AwardValue, PeriodFilter};
use crate::poop_repo::{SqlitePoopRepository, LATEST_USERNAME};
use crate::stats::parse_day;
use crate::streak::longest_streak;

impl SqlitePoopRepository {
    pub(crate) async fn evaluate_award(&self, kind: AwardKind, year: i32) -> Result<Option<Award>> {
        let year = PeriodFilter::year(year);
        let winner = match kind {
            AwardKind::EarlyBird | AwardKind::NightOwl | AwardKind::CompanyTime => {
                self.hour_window_winner(kind, &year).await?
            }
            AwardKind::MachineGun => self.machine_gun_winner(&year).await?,
            AwardKind::ConsistencyKing => self.consistency_winner(&year).await?,
            AwardKind::WeekendWarrior => self.weekend_winner(&year).await?,
        };

        let award = winner
            .filter(|(_, value)| !value.is_zero())
            .map(|(username, value)| Award::new(kind, username, value));
        debug!(award = kind.name(), year = %year.key, awarded = award.is_some(), "Award evaluated");
        Ok(award)
    }

    async fn hour_window_winner(
        &self,
        kind: AwardKind,
        year: &PeriodFilter,
    ) -> Result<Option<(String, AwardValue)>> {
        let Some(window) = kind.hour_window("p") else {
            return Ok(None);
        };
        let sql = format!(
            r#"
            SELECT {username} AS username, COUNT(*) AS poop_count
            FROM poop_tracker p
            WHERE {year} AND {window}
            GROUP BY p.user_id
            ORDER BY poop_count DESC, MAX(p.timestamp) ASC, p.user_id ASC
            LIMIT 1
            "#,
            username = LATEST_USERNAME,
            year = year.condition("p"),
        );

        let row: Option<(String, i64)> = sqlx::query_as(&sql)
            .bind(&year.key)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        Ok(row.map(|(username, count)| (username, AwardValue::Count(count))))
    }

    async fn machine_gun_winner(&self, year: &PeriodFilter) -> Result<Option<(String, AwardValue)>> {
        let sql = format!(
            r#"
            SELECT d.user_id, MAX(d.daily_count) AS best
            FROM (
                SELECT p.user_id AS user_id, date(p.timestamp) AS day, COUNT(*) AS daily_count
                FROM poop_tracker p
                WHERE {}
                GROUP BY p.user_id, day
            ) AS d
            GROUP BY d.user_id
            ORDER BY best DESC, d.user_id ASC
            LIMIT 1
            "#,
            year.condition("p"),
        );

        let row: Option<(i64, i64)> = sqlx::query_as(&sql)
            .bind(&year.key)
            .fetch_optional(self.pool_manager.pool())
            .await?;

        match row {
            Some((user_id, best)) => Ok(Some((
                self.latest_username(user_id).await?,
                AwardValue::Count(best),
            ))),
            None => Ok(None),
        }
    }

    async fn consistency_winner(&self, year: &PeriodFilter) -> Result<Option<(String, AwardValue)>> {
        let sql = format!(
            "SELECT DISTINCT p.user_id, date(p.timestamp) AS day FROM poop_tracker p WHERE {} ORDER BY p.user_id, day",
            year.condition("p"),
        );
        let rows: Vec<(i64, String)> = sqlx::query_as(&sql)
            .bind(&year.key)
            .fetch_all(self.pool_manager.pool())
            .await?;

        let mut days_by_user: BTreeMap<i64, Vec<NaiveDate>> = BTreeMap::new();
        for (user_id, day) in &rows {
            days_by_user.entry(*user_id).or_default().push(parse_day(day)?);
        }

        // BTreeMap iterates by ascending user id, so a strict comparison keeps the lowest id on ties.
        let mut best: Option<(i64, i64)> = None;
        for (user_id, days) in &days_by_user {
            let streak = longest_streak(days);
            if best.map_or(true, |(_, top)| streak > top) {
                best = Some((*user_id, streak));
            }
        }

        match best {
            Some((user_id, streak)) => Ok(Some((
                self.latest_username(user_id).await?,
                AwardValue::Count(streak),
            ))),
            None => Ok(None),
        }
    }

    async fn weekend_winner(&self, year: &PeriodFilter) -> Result<Option<(String, AwardValue)>> {
        let sql = format!(
            r#"
            SELECT
                p.user_id,
                COUNT(*) AS total,
                SUM(CASE WHEN CAST(strftime('%w', p.timestamp) AS INTEGER) IN (0, 6) THEN 1 ELSE 0 END) AS weekend
            FROM poop_tracker p
            WHERE {}
            GROUP BY p.user_id
            ORDER BY p.user_id
            "#,
            year.condition("p"),
        );
        let rows: Vec<(i64, i64, i64)> = sqlx::query_as(&sql)
            .bind(&year.key)
            .fetch_all(self.pool_manager.pool())
            .await?;

        // Compare ratios by cross-multiplication so equal ratios stay equal.
        let mut best: Option<(i64, i64, i64)> = None;
        for (user_id, total, weekend) in rows {
            if total <= 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((_, best_total, best_weekend)) => weekend * best_total > best_weekend * total,
            };
            if better {
                best = Some((user_id, total, weekend));
            }
        }

        match best {
            Some((user_id, total, weekend)) => {
                let ratio = weekend as f64 / total as f64 * 100.0;
                Ok(Some((
                    self.latest_username(user_id).await?,
                    AwardValue::Percentage(ratio),
                )))
            }
            None => Ok(None),
        }
    }

    async fn latest_username(&self, user_id: i64) -> Result<String> {
        let row: (String,) = sqlx::query_as(
            "SELECT username FROM poop_tracker WHERE user_id = ? ORDER BY timestamp DESC, id DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_one(self.pool_manager.pool())
        .await?;
        Ok(row.0)
    }
}
