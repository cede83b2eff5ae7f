//! Integration tests for the statistics queries of [`poop_storage::SqlitePoopRepository`].
//!
//! Uses a temporary SQLite file and a clock pinned to 2025-01-31 12:00 UTC unless noted.

mod common;

use chrono::{NaiveDate, Weekday};
use common::*;
use poop_storage::{MonthKey, Period, PoopRepository, RankOrder, StorageError};

fn names(rows: &[poop_storage::UserCount]) -> Vec<&str> {
    rows.iter().map(|r| r.username.as_str()).collect()
}

/// **Test: Counts for a user with no events are zero, not errors.**
///
/// **Setup:** Empty DB.
/// **Expected:** global/monthly/year counts are 0, streak 0, breakdown empty.
#[tokio::test]
async fn test_empty_user_counts() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;

    assert_eq!(repo.global_count(ALICE).await.unwrap(), 0);
    assert_eq!(repo.monthly_count(ALICE).await.unwrap(), 0);
    assert_eq!(repo.year_count(ALICE, 2025).await.unwrap(), 0);
    assert_eq!(repo.max_streak(ALICE).await.unwrap(), 0);
    assert!(repo.monthly_breakdown(ALICE).await.unwrap().is_empty());
    assert!(repo.monthly_leaderboard().await.unwrap().is_empty());
}

/// **Test: Bob's streak and yearly count.**
///
/// **Setup:** January group.
/// **Expected:** max_streak(bob) = 3, year_count(bob, 2025) = 10, nothing in 2024.
#[tokio::test]
async fn test_bob_streak_and_year_count() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&repo).await;

    assert_eq!(repo.max_streak(BOB).await.unwrap(), 3);
    assert_eq!(repo.year_count(BOB, 2025).await.unwrap(), 10);
    assert_eq!(repo.year_count(BOB, 2024).await.unwrap(), 0);
    assert_eq!(repo.global_count(BOB).await.unwrap(), 10);
}

/// **Test: Streak counts calendar days, not events; a one-day gap resets it.**
///
/// **Setup:** Two events on Jan 1, one on Jan 3.
/// **Expected:** max_streak = 1.
#[tokio::test]
async fn test_streak_gap_and_same_day_events() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    log(&repo, ALICE, "alice", 1, at(2025, 1, 1, 8)).await;
    log(&repo, ALICE, "alice", 2, at(2025, 1, 1, 20)).await;
    log(&repo, ALICE, "alice", 3, at(2025, 1, 3, 8)).await;

    assert_eq!(repo.max_streak(ALICE).await.unwrap(), 1);

    log(&repo, ALICE, "alice", 4, at(2025, 1, 2, 8)).await;
    assert_eq!(repo.max_streak(ALICE).await.unwrap(), 3);
}

/// **Test: Monthly breakdown is ordered by month key and spans years.**
///
/// **Setup:** Events in 2024-12, 2025-01 (x2), 2025-03.
/// **Expected:** three rows in chronological order with matching counts.
#[tokio::test]
async fn test_monthly_breakdown_order() {
    let (_dir, repo) = open_repo(at(2025, 3, 10, 12)).await;
    log(&repo, ALICE, "alice", 1, at(2025, 3, 2, 8)).await;
    log(&repo, ALICE, "alice", 2, at(2024, 12, 31, 23)).await;
    log(&repo, ALICE, "alice", 3, at(2025, 1, 1, 0)).await;
    log(&repo, ALICE, "alice", 4, at(2025, 1, 20, 7)).await;

    let months = repo.monthly_breakdown(ALICE).await.unwrap();
    let keys: Vec<&str> = months.iter().map(|m| m.year_month.as_str()).collect();
    let counts: Vec<i64> = months.iter().map(|m| m.count).collect();

    assert_eq!(keys, vec!["2024-12", "2025-01", "2025-03"]);
    assert_eq!(counts, vec![1, 2, 1]);
    assert_eq!(repo.monthly_count(ALICE).await.unwrap(), 1);
    assert_eq!(
        repo.period_count(ALICE, MonthKey::new(2025, 1).unwrap()).await.unwrap(),
        2
    );
}

/// **Test: Monthly leaderboard ordering and tie-break.**
///
/// **Setup:** January group.
/// **Expected:** DESC by count; on equal counts the user whose latest event is earliest comes first.
#[tokio::test]
async fn test_monthly_leaderboard() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&repo).await;

    let board = repo.monthly_leaderboard().await.unwrap();
    assert_eq!(
        names(&board),
        vec!["bob", "company_time", "charlie", "early_bird", "machine_gun", "alice"]
    );
    let counts: Vec<i64> = board.iter().map(|r| r.count).collect();
    assert_eq!(counts, vec![10, 8, 8, 6, 5, 5]);
}

/// **Test: Poodium and bottom poopers are truncated to three.**
///
/// **Setup:** January group.
/// **Expected:** top 3 DESC; bottom 3 ASC with the same latest-event-ascending tie-break.
#[tokio::test]
async fn test_poodium_and_bottom_poopers() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&repo).await;

    let podium = repo.monthly_poodium().await.unwrap();
    assert_eq!(names(&podium), vec!["bob", "company_time", "charlie"]);

    let yearly = repo.yearly_poodium().await.unwrap();
    assert_eq!(yearly, podium);

    let bottom = repo.bottom_poopers().await.unwrap();
    assert_eq!(names(&bottom), vec!["machine_gun", "alice", "early_bird"]);
}

/// **Test: Past-month poodium looks at the previous calendar month.**
///
/// **Setup:** January group; clock in January, then in February.
/// **Expected:** empty in January (nothing in December), full podium in February.
#[tokio::test]
async fn test_past_month_poodium() {
    let (_dir, january) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&january).await;
    assert!(january.past_month_poodium().await.unwrap().is_empty());

    let (_dir2, february) = open_repo(at(2025, 2, 1, 0)).await;
    seed_january_group(&february).await;
    let podium = february.past_month_poodium().await.unwrap();
    assert_eq!(names(&podium), vec!["bob", "company_time", "charlie"]);
    assert!(february.monthly_poodium().await.unwrap().is_empty());
}

/// **Test: top_n with fewer users than the limit.**
///
/// **Setup:** 0, then 1, then 2 users.
/// **Expected:** 0, 1, 2 rows; no error.
#[tokio::test]
async fn test_top_n_with_few_users() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;

    assert_eq!(repo.monthly_poodium().await.unwrap().len(), 0);
    log(&repo, ALICE, "alice", 1, at(2025, 1, 2, 8)).await;
    assert_eq!(repo.monthly_poodium().await.unwrap().len(), 1);
    log(&repo, BOB, "bob", 2, at(2025, 1, 3, 8)).await;
    assert_eq!(repo.monthly_poodium().await.unwrap().len(), 2);
    assert_eq!(repo.bottom_poopers().await.unwrap().len(), 2);
}

/// **Test: Explicit periods and the latest display name.**
///
/// **Setup:** Alice logs as "alice" in January and "alice_renamed" in February.
/// **Expected:** results use the most recent display name; Month/Year periods filter correctly.
#[tokio::test]
async fn test_top_n_explicit_periods() {
    let (_dir, repo) = open_repo(at(2025, 2, 10, 12)).await;
    log(&repo, ALICE, "alice", 1, at(2025, 1, 2, 8)).await;
    log(&repo, ALICE, "alice_renamed", 2, at(2025, 2, 3, 8)).await;
    log(&repo, BOB, "bob", 3, at(2024, 6, 1, 8)).await;

    let january = repo
        .top_n(Period::Month(MonthKey::new(2025, 1).unwrap()), None, RankOrder::Desc)
        .await
        .unwrap();
    assert_eq!(names(&january), vec!["alice_renamed"]);
    assert_eq!(january[0].count, 1);

    let y2024 = repo.top_n(Period::Year(2024), None, RankOrder::Desc).await.unwrap();
    assert_eq!(names(&y2024), vec!["bob"]);

    let limited = repo.top_n(Period::CurrentYear, Some(0), RankOrder::Desc).await.unwrap();
    assert!(limited.is_empty());
}

/// **Test: Days without events from January 1 through today.**
///
/// **Setup:** January group, today = Jan 31.
/// **Expected:** bob has 10 active days, so 21 empty days; a user with no events has 31.
#[tokio::test]
async fn test_days_without_event() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&repo).await;

    assert_eq!(repo.days_without_event(BOB).await.unwrap(), 21);
    assert_eq!(repo.days_without_event(MACHINE_GUN).await.unwrap(), 30);
    assert_eq!(repo.days_without_event(9999).await.unwrap(), 31);
}

/// **Test: Days without events ignores other years and future events.**
///
/// **Setup:** today = Jan 3 2025; events on Dec 31 2024, Jan 2 2025 and Jan 10 2025.
/// **Expected:** 3 calendar days, 1 active, so 2.
#[tokio::test]
async fn test_days_without_event_bounds() {
    let (_dir, repo) = open_repo(at(2025, 1, 3, 6)).await;
    log(&repo, ALICE, "alice", 1, at(2024, 12, 31, 8)).await;
    log(&repo, ALICE, "alice", 2, at(2025, 1, 2, 8)).await;
    log(&repo, ALICE, "alice", 3, at(2025, 1, 10, 8)).await;

    assert_eq!(repo.days_without_event(ALICE).await.unwrap(), 2);
}

/// **Test: Day with most events, tie broken by earliest date.**
///
/// **Setup:** January group.
/// **Expected:** machine_gun → Jan 15 with 5; bob (one per day) → Jan 1 with 1; unknown user → NoData.
#[tokio::test]
async fn test_day_with_most_events() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&repo).await;

    let busiest = repo.day_with_most_events(MACHINE_GUN).await.unwrap();
    assert_eq!(busiest.day, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    assert_eq!(busiest.count, 5);

    let bob = repo.day_with_most_events(BOB).await.unwrap();
    assert_eq!(bob.day, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(bob.count, 1);

    let err = repo.day_with_most_events(9999).await.unwrap_err();
    assert!(matches!(err, StorageError::NoData(_)));
}

/// **Test: Hour distribution has 24 zero-filled buckets summing to the year count.**
///
/// **Setup:** January group.
/// **Expected:** bob: 23h → 3, 1h → 4, 2h → 3; sum 10. Unknown user: 24 zeros.
#[tokio::test]
async fn test_hour_distribution() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&repo).await;

    let hours = repo.hour_distribution(BOB, 2025).await.unwrap();
    assert_eq!(hours.len(), 24);
    for (i, bucket) in hours.iter().enumerate() {
        assert_eq!(bucket.hour as usize, i);
    }
    assert_eq!(hours[23].count, 3);
    assert_eq!(hours[1].count, 4);
    assert_eq!(hours[2].count, 3);
    assert_eq!(hours.iter().map(|h| h.count).sum::<i64>(), 10);

    let empty = repo.hour_distribution(9999, 2025).await.unwrap();
    assert_eq!(empty.len(), 24);
    assert!(empty.iter().all(|h| h.count == 0));
}

/// **Test: Weekday distribution is Monday..Sunday, zero-filled, summing to the year count.**
///
/// **Setup:** January group.
/// **Expected:** charlie: 4 on Saturday, 4 on Sunday, 0 elsewhere; alice: 5 on Wednesday.
#[tokio::test]
async fn test_weekday_distribution() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&repo).await;

    let days = repo.weekday_distribution(CHARLIE, 2025).await.unwrap();
    let order: Vec<Weekday> = days.iter().map(|d| d.weekday).collect();
    assert_eq!(
        order,
        vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun
        ]
    );
    let counts: Vec<i64> = days.iter().map(|d| d.count).collect();
    assert_eq!(counts, vec![0, 0, 0, 0, 0, 4, 4]);

    let alice = repo.weekday_distribution(ALICE, 2025).await.unwrap();
    assert_eq!(alice[2].count, 5);
    assert_eq!(
        alice.iter().map(|d| d.count).sum::<i64>(),
        repo.year_count(ALICE, 2025).await.unwrap()
    );
}

/// **Test: Yearly ranking rank, total and percentile.**
///
/// **Setup:** January group (6 users).
/// **Expected:** bob rank 1, alice rank 6 (tie with machine_gun broken by latest event); percentiles in [0,100).
#[tokio::test]
async fn test_yearly_ranking() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&repo).await;

    let bob = repo.yearly_ranking(BOB, 2025).await.unwrap();
    assert_eq!(bob.rank, 1);
    assert_eq!(bob.total_users, 6);
    assert!((bob.percentile - 500.0 / 6.0).abs() < 1e-9);

    let alice = repo.yearly_ranking(ALICE, 2025).await.unwrap();
    assert_eq!(alice.rank, 6);
    assert_eq!(alice.percentile, 0.0);

    for user in [ALICE, BOB, CHARLIE, MACHINE_GUN, EARLY_BIRD, COMPANY_TIME] {
        let ranking = repo.yearly_ranking(user, 2025).await.unwrap();
        assert!(ranking.percentile >= 0.0 && ranking.percentile < 100.0);
    }
}

/// **Test: Ranking edge cases.**
///
/// **Setup:** One user in 2025.
/// **Expected:** rank 1 of 1, percentile exactly 0; a user absent from the year → NoData.
#[tokio::test]
async fn test_yearly_ranking_edge_cases() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    log(&repo, ALICE, "alice", 1, at(2025, 1, 2, 8)).await;
    log(&repo, BOB, "bob", 2, at(2024, 1, 2, 8)).await;

    let lone = repo.yearly_ranking(ALICE, 2025).await.unwrap();
    assert_eq!(lone.rank, 1);
    assert_eq!(lone.total_users, 1);
    assert_eq!(lone.percentile, 0.0);

    let err = repo.yearly_ranking(BOB, 2025).await.unwrap_err();
    assert!(matches!(err, StorageError::NoData(_)));
}

/// **Test: Group yearly stats list every user of the year, DESC by count.**
///
/// **Setup:** January group.
/// **Expected:** 6 rows, non-increasing counts, bob first with 10.
#[tokio::test]
async fn test_group_yearly_stats() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&repo).await;

    let stats = repo.group_yearly_stats(2025).await.unwrap();
    assert_eq!(stats.len(), 6);
    assert!(stats.windows(2).all(|w| w[0].count >= w[1].count));
    assert_eq!(stats[0].username, "bob");
    assert_eq!(stats[0].count, 10);

    assert!(repo.group_yearly_stats(2024).await.unwrap().is_empty());
}

/// **Test: Reads are repeatable.**
///
/// **Setup:** January group.
/// **Expected:** two calls of each read return identical values.
#[tokio::test]
async fn test_reads_are_idempotent() {
    let (_dir, repo) = open_repo(at(2025, 1, 31, 12)).await;
    seed_january_group(&repo).await;

    assert_eq!(
        repo.monthly_leaderboard().await.unwrap(),
        repo.monthly_leaderboard().await.unwrap()
    );
    assert_eq!(
        repo.hour_distribution(BOB, 2025).await.unwrap(),
        repo.hour_distribution(BOB, 2025).await.unwrap()
    );
    assert_eq!(
        repo.yearly_ranking(CHARLIE, 2025).await.unwrap(),
        repo.yearly_ranking(CHARLIE, 2025).await.unwrap()
    );
}
