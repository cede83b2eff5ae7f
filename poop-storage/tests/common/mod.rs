//! Shared fixtures: a throw-away SQLite file and a January 2025 group.
//!
//! January 1, 2025 is a Wednesday. All events are UTC.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use poop_storage::{FixedClock, NewPoopEvent, PoopRepository, SqlitePoopRepository};
use tempfile::TempDir;

pub const ALICE: i64 = 1001;
pub const BOB: i64 = 1002;
pub const CHARLIE: i64 = 1003;
pub const MACHINE_GUN: i64 = 1004;
pub const EARLY_BIRD: i64 = 1005;
pub const COMPANY_TIME: i64 = 1006;

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Opens an empty repository whose "now" is `now`. Keep the TempDir alive for the test's duration.
pub async fn open_repo(now: DateTime<Utc>) -> (TempDir, SqlitePoopRepository) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("poop_tracker.db");
    let repo = SqlitePoopRepository::with_clock(path.to_str().unwrap(), Arc::new(FixedClock(now)))
        .await
        .expect("Failed to create repository");
    (dir, repo)
}

pub async fn log(repo: &SqlitePoopRepository, user_id: i64, username: &str, message_id: i64, when: DateTime<Utc>) {
    repo.append(&NewPoopEvent::new(user_id, username, message_id, when))
        .await
        .expect("Failed to append event");
}

/// Six users over January 2025:
///
/// - alice: 5 events, Wednesdays 1/8/15/22/29 at 08,09,10,08,09
/// - bob: Jan 1-3 at 23:00, then Jan 6,9,..,24 at 01/02 (10 events, streak 3)
/// - charlie: Sat/Sun Jan 4,5,11,12,18,19 at 10:00 plus Jan 4,5 at 15:00 (8 events, all weekend)
/// - machine_gun: 5 events on Jan 15 at 08,11,14,17,20
/// - early_bird: Jan 1,5,9,13,17,21 at 06,07,08,06,07,08
/// - company_time: Jan 2,4,..,16 at 09..16
pub async fn seed_january_group(repo: &SqlitePoopRepository) {
    for i in 0..5u32 {
        log(repo, ALICE, "alice", 1000 + i as i64, at(2025, 1, 1 + 7 * i, 8 + i % 3)).await;
    }

    for day in 0..3u32 {
        log(repo, BOB, "bob", 2000 + day as i64, at(2025, 1, 1 + day, 23)).await;
    }
    for i in 0..7u32 {
        log(repo, BOB, "bob", 2010 + i as i64, at(2025, 1, 6 + 3 * i, 1 + i % 2)).await;
    }

    let weekend_days = [4u32, 5, 11, 12, 18, 19];
    for (i, day) in weekend_days.iter().enumerate() {
        log(repo, CHARLIE, "charlie", 3000 + i as i64, at(2025, 1, *day, 10)).await;
    }
    for (i, day) in weekend_days.iter().take(2).enumerate() {
        log(repo, CHARLIE, "charlie", 3010 + i as i64, at(2025, 1, *day, 15)).await;
    }

    for i in 0..5u32 {
        log(repo, MACHINE_GUN, "machine_gun", 4000 + i as i64, at(2025, 1, 15, 8 + 3 * i)).await;
    }

    for i in 0..6u32 {
        log(repo, EARLY_BIRD, "early_bird", 5000 + i as i64, at(2025, 1, 1 + 4 * i, 6 + i % 3)).await;
    }

    for i in 0..8u32 {
        log(repo, COMPANY_TIME, "company_time", 6000 + i as i64, at(2025, 1, 2 + 2 * i, 9 + i)).await;
    }
}
