//! Common test infrastructure for database integration tests.

use chrono::NaiveDate;
use std::sync::Arc;
use usermgmt_config::DatabaseConfig;
use usermgmt_core::{User, UserId};
use usermgmt_repository::{DatabasePool, DatabasePoolInterface, SqliteUserDao};

/// Ids seeded by [`TestDatabase::seeded`].
pub const SEEDED_IDS: [i64; 2] = [1000, 1001];

/// Migrated in-memory SQLite database.
///
/// A single connection holds the database, so it lives exactly as long as
/// this value.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates an empty, migrated database.
    pub async fn new() -> Self {
        let pool = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open in-memory database");
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Creates a database holding the two fixture users.
    pub async fn seeded() -> Self {
        let db = Self::new().await;
        for (id, first) in SEEDED_IDS.iter().zip(["Morty", "Summer"]) {
            sqlx::query(
                "INSERT INTO users (id, first_name, last_name, date_of_birth) VALUES (?, ?, 'Smith', ?)",
            )
            .bind(id)
            .bind(first)
            .bind(fixture_date())
            .execute(db.pool.inner())
            .await
            .expect("Failed to seed users");
        }
        db
    }

    /// Returns a DAO over this database.
    pub fn dao(&self) -> SqliteUserDao {
        SqliteUserDao::new(self.pool.clone())
    }

    /// Returns the raw row count of the users table.
    pub async fn count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner())
            .await
            .expect("Failed to count users")
    }
}

/// Birth date of every seeded user.
pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1999, 7, 25).unwrap()
}

/// Returns the seeded user with `id`.
pub fn seeded_user(id: i64) -> User {
    let first = if id == SEEDED_IDS[0] { "Morty" } else { "Summer" };
    User::with_id(UserId(id), first, "Smith", fixture_date())
}
