//! SQLite user DAO implementation.

use crate::dao::user_dao::{ensure_transient, persisted_id};
use crate::{DatabasePoolInterface, UserDao};
use async_trait::async_trait;
use chrono::NaiveDate;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use usermgmt_core::{User, UserId, UserMgmtError, UserMgmtResult};

/// SQLite-backed user DAO.
#[derive(Component, Clone)]
#[shaku(interface = UserDao)]
pub struct SqliteUserDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteUserDao {
    /// Creates a new SQLite user DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::with_id(UserId(row.id), row.first_name, row.last_name, row.date_of_birth)
    }
}

#[async_trait]
impl UserDao for SqliteUserDao {
    async fn create(&self, user: &User) -> UserMgmtResult<User> {
        ensure_transient(user)?;
        debug!("Creating user: {}", user.full_name());

        let result = sqlx::query(
            "INSERT INTO users (first_name, last_name, date_of_birth) VALUES (?, ?, ?)",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.date_of_birth)
        .execute(self.pool.inner())
        .await?;

        Ok(user.persisted_as(UserId(result.last_insert_rowid())))
    }

    async fn update(&self, user: &User) -> UserMgmtResult<()> {
        let id = persisted_id(user, "update")?;
        debug!("Updating user: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = ?, last_name = ?, date_of_birth = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.date_of_birth)
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(UserMgmtError::not_found("User", id));
        }
        Ok(())
    }

    async fn delete(&self, user: &User) -> UserMgmtResult<()> {
        let id = persisted_id(user, "delete")?;
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(UserMgmtError::not_found("User", id));
        }
        Ok(())
    }

    async fn find(&self, id: UserId) -> UserMgmtResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, first_name, last_name, date_of_birth FROM users WHERE id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> UserMgmtResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, first_name, last_name, date_of_birth FROM users ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}

impl std::fmt::Debug for SqliteUserDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserDao").finish_non_exhaustive()
    }
}
