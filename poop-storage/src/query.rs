//! Closed catalog of statistics queries and their results.
//!
//! Callers (the CLI, a scheduler) describe what they need as a [`StatsQuery`] and get a
//! [`StatsReport`] back; one `match` maps each query onto the repository.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{
    Award, AwardKind, DayCount, HourBucket, MonthKey, MonthlyCount, Period, RankOrder, Ranking,
    UserCount, WeekdayBucket,
};
use crate::repository::PoopRepository;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatsQuery {
    GlobalCount { user_id: i64 },
    MonthlyCount { user_id: i64 },
    PeriodCount { user_id: i64, month: MonthKey },
    MonthlyBreakdown { user_id: i64 },
    TopN {
        period: Period,
        limit: Option<usize>,
        order: RankOrder,
    },
    MonthlyLeaderboard,
    MonthlyPoodium,
    PastMonthPoodium,
    YearlyPoodium,
    BottomPoopers,
    DaysWithoutEvent { user_id: i64 },
    MaxStreak { user_id: i64 },
    DayWithMostEvents { user_id: i64 },
    YearCount { user_id: i64, year: i32 },
    HourDistribution { user_id: i64, year: i32 },
    WeekdayDistribution { user_id: i64, year: i32 },
    YearlyRanking { user_id: i64, year: i32 },
    GroupYearlyStats { year: i32 },
    GroupAwards { year: i32 },
    Award { kind: AwardKind, year: i32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum StatsReport {
    Count(i64),
    Months(Vec<MonthlyCount>),
    Users(Vec<UserCount>),
    Day(DayCount),
    Hours(Vec<HourBucket>),
    Weekdays(Vec<WeekdayBucket>),
    Ranking(Ranking),
    Awards(Vec<Award>),
    Award(Option<Award>),
}

impl StatsQuery {
    pub async fn execute(&self, repo: &dyn PoopRepository) -> Result<StatsReport> {
        let report = match *self {
            StatsQuery::GlobalCount { user_id } => StatsReport::Count(repo.global_count(user_id).await?),
            StatsQuery::MonthlyCount { user_id } => StatsReport::Count(repo.monthly_count(user_id).await?),
            StatsQuery::PeriodCount { user_id, month } => {
                StatsReport::Count(repo.period_count(user_id, month).await?)
            }
            StatsQuery::MonthlyBreakdown { user_id } => {
                StatsReport::Months(repo.monthly_breakdown(user_id).await?)
            }
            StatsQuery::TopN { period, limit, order } => {
                StatsReport::Users(repo.top_n(period, limit, order).await?)
            }
            StatsQuery::MonthlyLeaderboard => StatsReport::Users(repo.monthly_leaderboard().await?),
            StatsQuery::MonthlyPoodium => StatsReport::Users(repo.monthly_poodium().await?),
            StatsQuery::PastMonthPoodium => StatsReport::Users(repo.past_month_poodium().await?),
            StatsQuery::YearlyPoodium => StatsReport::Users(repo.yearly_poodium().await?),
            StatsQuery::BottomPoopers => StatsReport::Users(repo.bottom_poopers().await?),
            StatsQuery::DaysWithoutEvent { user_id } => {
                StatsReport::Count(repo.days_without_event(user_id).await?)
            }
            StatsQuery::MaxStreak { user_id } => StatsReport::Count(repo.max_streak(user_id).await?),
            StatsQuery::DayWithMostEvents { user_id } => {
                StatsReport::Day(repo.day_with_most_events(user_id).await?)
            }
            StatsQuery::YearCount { user_id, year } => {
                StatsReport::Count(repo.year_count(user_id, year).await?)
            }
            StatsQuery::HourDistribution { user_id, year } => {
                StatsReport::Hours(repo.hour_distribution(user_id, year).await?)
            }
            StatsQuery::WeekdayDistribution { user_id, year } => {
                StatsReport::Weekdays(repo.weekday_distribution(user_id, year).await?)
            }
            StatsQuery::YearlyRanking { user_id, year } => {
                StatsReport::Ranking(repo.yearly_ranking(user_id, year).await?)
            }
            StatsQuery::GroupYearlyStats { year } => StatsReport::Users(repo.group_yearly_stats(year).await?),
            StatsQuery::GroupAwards { year } => StatsReport::Awards(repo.group_awards(year).await?),
            StatsQuery::Award { kind, year } => StatsReport::Award(repo.award(kind, year).await?),
        };
        Ok(report)
    }
}
