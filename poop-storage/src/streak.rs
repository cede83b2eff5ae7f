//! Streak detection over calendar days.
//!
//! Days are ranked in ascending order; `day_number - rank` is constant across a run of
//! contiguous dates, so each distinct value of that key is one streak.

use chrono::{Datelike, NaiveDate};

/// Length of the longest run of contiguous dates. Duplicates count once; order does not matter.
pub fn longest_streak(days: &[NaiveDate]) -> i64 {
    let mut days = days.to_vec();
    days.sort_unstable();
    days.dedup();

    let mut best = 0;
    let mut run = 0;
    let mut group: Option<i64> = None;

    for (rank, day) in days.iter().enumerate() {
        let key = i64::from(day.num_days_from_ce()) - rank as i64;
        if group == Some(key) {
            run += 1;
        } else {
            group = Some(key);
            run = 1;
        }
        best = best.max(run);
    }

    best
}
