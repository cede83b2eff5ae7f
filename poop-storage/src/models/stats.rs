//! Aggregate result types returned by the statistics queries. Plain data, no formatting.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCount {
    pub username: String,
    pub count: i64,
}

/// Events in one calendar month; `year_month` is `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub year_month: String,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    pub hour: u32,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayBucket {
    pub weekday: Weekday,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub day: NaiveDate,
    pub count: i64,
}

/// Position of a user among everyone who logged in a year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// 1-based.
    pub rank: i64,
    pub total_users: i64,
    /// Share of users ranked below, in `[0, 100)`.
    pub percentile: f64,
}

impl Ranking {
    pub fn new(rank: i64, total_users: i64) -> Self {
        let percentile = if total_users > 0 {
            (total_users - rank) as f64 / total_users as f64 * 100.0
        } else {
            0.0
        };
        Self {
            rank,
            total_users,
            percentile,
        }
    }
}
