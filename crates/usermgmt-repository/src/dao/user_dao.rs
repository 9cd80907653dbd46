//! UserDao trait: user data access abstraction.
//!
//! The navigation layer only ever talks to this trait. Which implementation
//! sits behind it is decided once, by [`DaoFactory`], from configuration.
//!
//! [`DaoFactory`]: crate::DaoFactory

use async_trait::async_trait;
use shaku::Interface;
use usermgmt_core::{User, UserId, UserMgmtError, UserMgmtResult};

/// User data access object.
///
/// Every operation may fail with `UserMgmtError::Database`; `update` and
/// `delete` fail with `UserMgmtError::NotFound` when the id is unknown.
#[async_trait]
pub trait UserDao: Interface + Send + Sync {
    /// Persists a new user.
    ///
    /// The input must not carry an id. Returns a copy bound to the
    /// store-assigned id with every other field unchanged.
    async fn create(&self, user: &User) -> UserMgmtResult<User>;

    /// Replaces the stored fields of the record with `user.id`.
    async fn update(&self, user: &User) -> UserMgmtResult<()>;

    /// Removes the record with `user.id`.
    async fn delete(&self, user: &User) -> UserMgmtResult<()>;

    /// Finds a user by ID.
    async fn find(&self, id: UserId) -> UserMgmtResult<Option<User>>;

    /// Returns every user in insertion order.
    async fn find_all(&self) -> UserMgmtResult<Vec<User>>;
}

/// Returns the id of a user that `operation` requires to be persisted.
pub(crate) fn persisted_id(user: &User, operation: &str) -> UserMgmtResult<UserId> {
    user.id.ok_or_else(|| {
        UserMgmtError::Database(format!("Cannot {} a user that has no id", operation))
    })
}

/// Rejects a user that already carries an id.
pub(crate) fn ensure_transient(user: &User) -> UserMgmtResult<()> {
    if user.is_persisted() {
        return Err(UserMgmtError::Database(
            "Cannot create a user that already has an id".to_string(),
        ));
    }
    Ok(())
}
