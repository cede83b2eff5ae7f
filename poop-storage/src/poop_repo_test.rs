//! Unit tests for SqlitePoopRepository.
//!
//! Covers append, duplicate rejection, lookup by message id and the health check.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use crate::clock::FixedClock;
use crate::error::StorageError;
use crate::models::NewPoopEvent;
use crate::poop_repo::SqlitePoopRepository;
use crate::repository::PoopRepository;

async fn open_repo() -> (TempDir, SqlitePoopRepository) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("poop.db");
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap());
    let repo = SqlitePoopRepository::with_clock(path.to_str().unwrap(), Arc::new(clock))
        .await
        .expect("Failed to create repository");
    (dir, repo)
}

fn event(user_id: i64, username: &str, message_id: i64, day: u32, hour: u32) -> NewPoopEvent {
    NewPoopEvent::new(
        user_id,
        username,
        message_id,
        Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap(),
    )
}

#[tokio::test]
async fn test_append_and_lookup() {
    let (_dir, repo) = open_repo().await;

    let new_event = event(1002, "bob", 2000, 1, 23);
    repo.append(&new_event).await.expect("Failed to append");

    let stored = repo
        .event_by_message_id(2000)
        .await
        .expect("Failed to query")
        .expect("Event missing");

    assert!(stored.id > 0);
    assert_eq!(stored.user_id, 1002);
    assert_eq!(stored.username, "bob");
    assert_eq!(stored.timestamp, new_event.timestamp);
    assert_eq!(stored.created_at_unix, new_event.created_at_unix);
}

#[tokio::test]
async fn test_lookup_missing_message() {
    let (_dir, repo) = open_repo().await;

    let stored = repo.event_by_message_id(42).await.expect("Failed to query");
    assert!(stored.is_none());
}

#[tokio::test]
async fn test_append_increments_global_count() {
    let (_dir, repo) = open_repo().await;

    assert_eq!(repo.global_count(7).await.unwrap(), 0);
    for i in 0..3 {
        repo.append(&event(7, "seven", 700 + i, 2 + i as u32, 9))
            .await
            .unwrap();
        assert_eq!(repo.global_count(7).await.unwrap(), i + 1);
    }
}

#[tokio::test]
async fn test_duplicate_message_id_rejected() {
    let (_dir, repo) = open_repo().await;

    repo.append(&event(1, "alice", 1000, 1, 8)).await.unwrap();
    let err = repo
        .append(&event(1, "alice", 1000, 1, 9))
        .await
        .expect_err("Duplicate must fail");

    assert!(matches!(err, StorageError::DuplicateEvent { message_id: 1000 }));
    assert!(err.is_duplicate());
    assert_eq!(repo.global_count(1).await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_message_id_across_users() {
    let (_dir, repo) = open_repo().await;

    repo.append(&event(1, "alice", 5, 1, 8)).await.unwrap();
    let err = repo.append(&event(2, "bob", 5, 1, 8)).await.unwrap_err();

    assert!(err.is_duplicate());
    assert_eq!(repo.global_count(2).await.unwrap(), 0);
}

#[tokio::test]
async fn test_health_check() {
    let (_dir, repo) = open_repo().await;
    repo.health_check().await.expect("Health check failed");
}

#[tokio::test]
async fn test_reopen_keeps_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poop.db");
    let path = path.to_str().unwrap();

    {
        let repo = SqlitePoopRepository::new(path).await.unwrap();
        repo.append(&event(3, "carol", 30, 3, 12)).await.unwrap();
    }

    let repo = SqlitePoopRepository::new(path).await.unwrap();
    assert_eq!(repo.global_count(3).await.unwrap(), 1);
}
