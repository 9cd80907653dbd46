//! In-memory user DAO implementation.

use crate::dao::user_dao::{ensure_transient, persisted_id};
use crate::UserDao;
use async_trait::async_trait;
use parking_lot::Mutex;
use shaku::Component;
use std::path::Path;
use tracing::{debug, info};
use usermgmt_core::{User, UserId, UserMgmtError, UserMgmtResult};

/// Records plus the id counter, guarded together.
#[derive(Debug, Default)]
pub struct InMemoryState {
    users: Vec<User>,
    next_id: UserId,
}

impl InMemoryState {
    fn insert(&mut self, user: &User) -> UserMgmtResult<User> {
        let id = match user.id {
            Some(id) if self.position(id).is_some() => {
                return Err(UserMgmtError::Database(format!("Duplicate user id {}", id)));
            }
            Some(id) => id,
            None => self.next_id,
        };
        if id.into_inner() == i64::MAX {
            return Err(UserMgmtError::Database(format!("User id {} is out of range", id)));
        }
        self.next_id = self.next_id.max(id.next());

        let stored = user.persisted_as(id);
        self.users.push(stored.clone());
        Ok(stored)
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == Some(id))
    }
}

/// Deterministic in-process user DAO.
///
/// Records keep insertion order. Ids start at 0 and the next id is always
/// one past the largest id ever stored, so ids are never reused.
#[derive(Component, Default)]
#[shaku(interface = UserDao)]
pub struct InMemoryUserDao {
    #[shaku(default)]
    state: Mutex<InMemoryState>,
}

impl InMemoryUserDao {
    /// Creates an empty DAO.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a DAO pre-populated with `users`.
    ///
    /// Users that carry an id keep it; the rest are assigned one. Fails
    /// with `Database` when two users share an id.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> UserMgmtResult<Self> {
        let dao = Self::new();
        {
            let mut state = dao.state.lock();
            for user in users {
                state.insert(&user)?;
            }
        }
        Ok(dao)
    }

    /// Creates a DAO seeded from a JSON array of users.
    pub async fn from_fixture(path: impl AsRef<Path>) -> UserMgmtResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            UserMgmtError::Database(format!("Failed to read fixture {}: {}", path.display(), e))
        })?;
        let users: Vec<User> = serde_json::from_str(&raw).map_err(|e| {
            UserMgmtError::Database(format!("Invalid fixture {}: {}", path.display(), e))
        })?;

        let count = users.len();
        let dao = Self::with_users(users).map_err(|e| {
            UserMgmtError::Database(format!("Invalid fixture {}: {}", path.display(), e))
        })?;
        info!("Loaded {} users from fixture {}", count, path.display());
        Ok(dao)
    }

    /// Returns the number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().users.len()
    }

    /// Returns true if no users are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().users.is_empty()
    }
}

#[async_trait]
impl UserDao for InMemoryUserDao {
    async fn create(&self, user: &User) -> UserMgmtResult<User> {
        ensure_transient(user)?;
        let created = self.state.lock().insert(user)?;
        debug!("Created user {:?}", created.id);
        Ok(created)
    }

    async fn update(&self, user: &User) -> UserMgmtResult<()> {
        let id = persisted_id(user, "update")?;
        let mut state = self.state.lock();
        let index = state
            .position(id)
            .ok_or_else(|| UserMgmtError::not_found("User", id))?;
        state.users[index] = user.clone();
        debug!("Updated user {}", id);
        Ok(())
    }

    async fn delete(&self, user: &User) -> UserMgmtResult<()> {
        let id = persisted_id(user, "delete")?;
        let mut state = self.state.lock();
        let index = state
            .position(id)
            .ok_or_else(|| UserMgmtError::not_found("User", id))?;
        state.users.remove(index);
        debug!("Deleted user {}", id);
        Ok(())
    }

    async fn find(&self, id: UserId) -> UserMgmtResult<Option<User>> {
        let state = self.state.lock();
        Ok(state.position(id).map(|index| state.users[index].clone()))
    }

    async fn find_all(&self) -> UserMgmtResult<Vec<User>> {
        Ok(self.state.lock().users.clone())
    }
}

impl std::fmt::Debug for InMemoryUserDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserDao")
            .field("len", &self.len())
            .finish()
    }
}
