//! Calendar periods used to filter events.
//!
//! Relative periods ("this month", "last month", "this year") resolve against a reference date
//! at query time; [`PeriodFilter`] is the resolved form that goes into SQL.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("expected YYYY-MM, got {:?}", s))?;
        let year: i32 = year.parse().map_err(|_| format!("invalid year in {:?}", s))?;
        let month: u32 = month.parse().map_err(|_| format!("invalid month in {:?}", s))?;
        MonthKey::new(year, month).ok_or_else(|| format!("month out of range in {:?}", s))
    }
}

/// Period predicate for leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    CurrentMonth,
    PreviousMonth,
    CurrentYear,
    Month(MonthKey),
    Year(i32),
}

impl Period {
    pub fn resolve(self, today: NaiveDate) -> PeriodFilter {
        match self {
            Period::CurrentMonth => PeriodFilter::month(MonthKey::of(today)),
            Period::PreviousMonth => PeriodFilter::month(MonthKey::of(today).previous()),
            Period::CurrentYear => PeriodFilter::year(today.year()),
            Period::Month(key) => PeriodFilter::month(key),
            Period::Year(year) => PeriodFilter::year(year),
        }
    }
}

/// `strftime(pattern, timestamp) = key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodFilter {
    pub pattern: &'static str,
    pub key: String,
}

impl PeriodFilter {
    pub fn month(key: MonthKey) -> Self {
        Self {
            pattern: "%Y-%m",
            key: key.to_string(),
        }
    }

    pub fn year(year: i32) -> Self {
        Self {
            pattern: "%Y",
            key: format!("{:04}", year),
        }
    }

    /// SQL condition on the `timestamp` column of `alias`; binds one parameter (the key).
    pub fn condition(&self, alias: &str) -> String {
        format!("strftime('{}', {}.timestamp) = ?", self.pattern, alias)
    }
}

/// Direction of the count ordering in leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankOrder {
    #[default]
    Desc,
    Asc,
}

impl RankOrder {
    pub(crate) fn sql(self) -> &'static str {
        match self {
            RankOrder::Desc => "DESC",
            RankOrder::Asc => "ASC",
        }
    }
}
