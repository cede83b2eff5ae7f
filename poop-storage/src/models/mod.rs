//! Storage models: the stored event, period predicates, aggregate results and awards.

mod award;
mod period;
mod poop_event;
mod stats;

pub use award::{Award, AwardKind, AwardValue};
pub use period::{MonthKey, Period, PeriodFilter, RankOrder};
pub use poop_event::{NewPoopEvent, PoopEvent, TIMESTAMP_FORMAT};
pub use stats::{DayCount, HourBucket, MonthlyCount, Ranking, UserCount, WeekdayBucket};
