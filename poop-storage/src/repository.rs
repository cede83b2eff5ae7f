//! The storage contract consumed by the bot: one append path, a health probe, and read-only statistics.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{
    Award, AwardKind, DayCount, HourBucket, MonthKey, MonthlyCount, NewPoopEvent, Period,
    PoopEvent, RankOrder, Ranking, UserCount, WeekdayBucket,
};

/// Size of every poodium.
pub const PODIUM_SIZE: usize = 3;

#[async_trait]
pub trait PoopRepository: Send + Sync {
    /// Appends one event. Fails with `DuplicateEvent` when the message id is already logged.
    async fn append(&self, event: &NewPoopEvent) -> Result<()>;

    async fn event_by_message_id(&self, message_id: i64) -> Result<Option<PoopEvent>>;

    /// Liveness probe, bounded by a 5 second timeout. Does not touch event data.
    async fn health_check(&self) -> Result<()>;

    /// Reference date for "this month", "last month", "this year" and "today".
    fn today(&self) -> NaiveDate;

    async fn global_count(&self, user_id: i64) -> Result<i64>;

    async fn period_count(&self, user_id: i64, month: MonthKey) -> Result<i64>;

    async fn monthly_breakdown(&self, user_id: i64) -> Result<Vec<MonthlyCount>>;

    /// Users with events in `period`, ordered by count (`order`), then by latest event ascending,
    /// then by user id. `limit = None` returns everyone.
    async fn top_n(
        &self,
        period: Period,
        limit: Option<usize>,
        order: RankOrder,
    ) -> Result<Vec<UserCount>>;

    async fn days_without_event(&self, user_id: i64) -> Result<i64>;

    async fn max_streak(&self, user_id: i64) -> Result<i64>;

    /// Fails with `NoData` when the user never logged anything.
    async fn day_with_most_events(&self, user_id: i64) -> Result<DayCount>;

    async fn year_count(&self, user_id: i64, year: i32) -> Result<i64>;

    async fn hour_distribution(&self, user_id: i64, year: i32) -> Result<Vec<HourBucket>>;

    async fn weekday_distribution(&self, user_id: i64, year: i32) -> Result<Vec<WeekdayBucket>>;

    /// Fails with `NoData` when the user has no events in `year`.
    async fn yearly_ranking(&self, user_id: i64, year: i32) -> Result<Ranking>;

    async fn group_yearly_stats(&self, year: i32) -> Result<Vec<UserCount>>;

    /// `None` when nobody qualifies or the winning value is zero.
    async fn award(&self, kind: AwardKind, year: i32) -> Result<Option<Award>>;

    async fn group_awards(&self, year: i32) -> Result<Vec<Award>> {
        let mut awards = Vec::new();
        for kind in AwardKind::ALL {
            if let Some(award) = self.award(kind, year).await? {
                awards.push(award);
            }
        }
        Ok(awards)
    }

    async fn monthly_count(&self, user_id: i64) -> Result<i64> {
        self.period_count(user_id, MonthKey::of(self.today())).await
    }

    async fn monthly_leaderboard(&self) -> Result<Vec<UserCount>> {
        self.top_n(Period::CurrentMonth, None, RankOrder::Desc).await
    }

    async fn monthly_poodium(&self) -> Result<Vec<UserCount>> {
        self.top_n(Period::CurrentMonth, Some(PODIUM_SIZE), RankOrder::Desc)
            .await
    }

    async fn past_month_poodium(&self) -> Result<Vec<UserCount>> {
        self.top_n(Period::PreviousMonth, Some(PODIUM_SIZE), RankOrder::Desc)
            .await
    }

    async fn yearly_poodium(&self) -> Result<Vec<UserCount>> {
        self.top_n(Period::CurrentYear, Some(PODIUM_SIZE), RankOrder::Desc)
            .await
    }

    async fn bottom_poopers(&self) -> Result<Vec<UserCount>> {
        self.top_n(Period::CurrentMonth, Some(PODIUM_SIZE), RankOrder::Asc)
            .await
    }
}
