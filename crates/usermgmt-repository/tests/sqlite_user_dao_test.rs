//! Integration tests for SqliteUserDao.
//!
//! These run against an in-memory SQLite database with migrations applied.

mod common;

use chrono::NaiveDate;
use common::{fixture_date, seeded_user, TestDatabase, SEEDED_IDS};
use usermgmt_core::{User, UserId, UserMgmtError};
use usermgmt_repository::UserDao;

fn jerry() -> User {
    User::new("Jerry", "Smith", NaiveDate::from_ymd_opt(1970, 4, 1).unwrap())
}

#[tokio::test]
async fn test_create_and_find() {
    let db = TestDatabase::new().await;
    let dao = db.dao();

    let created = dao.create(&jerry()).await.expect("Failed to create user");
    let id = created.id.expect("Created user has no id");
    assert_eq!(created.first_name, "Jerry");
    assert_eq!(created.last_name, "Smith");
    assert_eq!(created.date_of_birth, jerry().date_of_birth);

    let found = dao
        .find(id)
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let db = TestDatabase::seeded().await;
    let dao = db.dao();

    let first = dao.create(&jerry()).await.unwrap();
    let second = dao.create(&jerry()).await.unwrap();
    assert_ne!(first.id, second.id);
    for id in SEEDED_IDS {
        assert_ne!(first.id, Some(UserId(id)));
        assert_ne!(second.id, Some(UserId(id)));
    }
    assert_eq!(db.count().await, 4);
}

#[tokio::test]
async fn test_create_rejects_user_with_id() {
    let db = TestDatabase::new().await;
    let err = db.dao().create(&seeded_user(1000)).await.unwrap_err();
    assert!(matches!(err, UserMgmtError::Database(_)));
    assert_eq!(db.count().await, 0);
}

#[tokio::test]
async fn test_find_missing_returns_none() {
    let db = TestDatabase::seeded().await;
    let result = db.dao().find(UserId(42)).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_returns_seeded_users() {
    let db = TestDatabase::seeded().await;
    let users = db.dao().find_all().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0], seeded_user(1000));
    assert_eq!(users[1], seeded_user(1001));
}

#[tokio::test]
async fn test_find_all_empty() {
    let db = TestDatabase::new().await;
    assert!(db.dao().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_changes_only_target() {
    let db = TestDatabase::seeded().await;
    let dao = db.dao();

    let mut morty = seeded_user(1000);
    morty.last_name = "Sanchez".to_string();
    morty.date_of_birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    dao.update(&morty).await.expect("Failed to update user");

    assert_eq!(dao.find(UserId(1000)).await.unwrap(), Some(morty));
    assert_eq!(dao.find(UserId(1001)).await.unwrap(), Some(seeded_user(1001)));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let db = TestDatabase::seeded().await;
    let ghost = User::with_id(UserId(7), "Ghost", "Smith", fixture_date());

    let err = db.dao().update(&ghost).await.unwrap_err();
    assert!(matches!(err, UserMgmtError::NotFound { .. }));
    assert_eq!(db.count().await, 2);
}

#[tokio::test]
async fn test_update_without_id_fails() {
    let db = TestDatabase::seeded().await;
    let err = db.dao().update(&jerry()).await.unwrap_err();
    assert!(matches!(err, UserMgmtError::Database(_)));
}

#[tokio::test]
async fn test_delete_removes_only_target() {
    let db = TestDatabase::seeded().await;
    let dao = db.dao();

    dao.delete(&seeded_user(1000)).await.expect("Failed to delete user");

    assert!(dao.find(UserId(1000)).await.unwrap().is_none());
    assert_eq!(dao.find_all().await.unwrap(), vec![seeded_user(1001)]);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let db = TestDatabase::seeded().await;
    let dao = db.dao();

    dao.delete(&seeded_user(1001)).await.unwrap();
    let err = dao.delete(&seeded_user(1001)).await.unwrap_err();
    assert!(matches!(err, UserMgmtError::NotFound { .. }));
}
