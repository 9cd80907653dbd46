//! DAO factory.
//!
//! Picks the DAO strategy named by `dao.factory` and wires it through a
//! Shaku module:
//! - `SqliteDaoModule`: connection pool plus the SQLite DAO
//! - `InMemoryDaoModule`: the in-process double
//!
//! The factory is an ordinary value built once at startup. Building a new
//! one from different configuration replaces whatever the caller held
//! before; there is no process-wide instance.

use crate::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, InMemoryUserDao, SqliteUserDao,
    UserDao,
};
use shaku::{module, HasComponent};
use std::sync::Arc;
use tracing::info;
use usermgmt_config::{AppConfig, DaoConfig, DaoKind, DatabaseConfig};
use usermgmt_core::UserMgmtResult;

// SQLite deployment: pool and DAO, with the pool injected into the DAO.
module! {
    pub SqliteDaoModule {
        components = [
            DatabasePool,
            SqliteUserDao,
        ],
        providers = [],
    }
}

// In-memory deployment: the DAO alone.
module! {
    pub InMemoryDaoModule {
        components = [
            InMemoryUserDao,
        ],
        providers = [],
    }
}

/// Resolves the user DAO for the configured storage strategy.
#[derive(Clone)]
pub struct DaoFactory {
    kind: DaoKind,
    user_dao: Arc<dyn UserDao>,
    pool: Option<Arc<dyn DatabasePoolInterface>>,
}

impl DaoFactory {
    /// Builds the DAO selected by `dao.factory`.
    ///
    /// Fails with `NotInitialized` when no strategy is configured. For
    /// SQLite the pool is opened (and migrated if configured) here; for the
    /// in-memory strategy the optional fixture is loaded here.
    pub async fn init(dao: &DaoConfig, database: &DatabaseConfig) -> UserMgmtResult<Self> {
        let kind = dao.kind()?;
        info!("Initializing DAO factory: {}", kind);

        let factory = match kind {
            DaoKind::Sqlite => {
                let pool = DatabasePool::connect(database).await?;
                let module = SqliteDaoModule::builder()
                    .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
                        pool: pool.inner().clone(),
                    })
                    .build();
                Self::from_sqlite_module(&module)
            }
            DaoKind::Memory => {
                let mut builder = InMemoryDaoModule::builder();
                if let Some(fixture) = &dao.fixture {
                    let seeded = InMemoryUserDao::from_fixture(fixture).await?;
                    builder = builder.with_component_override::<dyn UserDao>(Box::new(seeded));
                }
                Self::from_memory_module(&builder.build())
            }
        };

        Ok(factory)
    }

    /// Builds the DAO selected by an application configuration.
    pub async fn from_config(config: &AppConfig) -> UserMgmtResult<Self> {
        Self::init(&config.dao, &config.database).await
    }

    /// Wraps an already constructed DAO.
    #[must_use]
    pub fn with_user_dao(kind: DaoKind, user_dao: Arc<dyn UserDao>) -> Self {
        Self {
            kind,
            user_dao,
            pool: None,
        }
    }

    fn from_sqlite_module(module: &SqliteDaoModule) -> Self {
        let pool: Arc<dyn DatabasePoolInterface> = module.resolve();
        let user_dao: Arc<dyn UserDao> = module.resolve();
        Self {
            kind: DaoKind::Sqlite,
            user_dao,
            pool: Some(pool),
        }
    }

    fn from_memory_module(module: &InMemoryDaoModule) -> Self {
        let user_dao: Arc<dyn UserDao> = module.resolve();
        Self::with_user_dao(DaoKind::Memory, user_dao)
    }

    /// Returns the selected strategy.
    #[must_use]
    pub const fn kind(&self) -> DaoKind {
        self.kind
    }

    /// Returns the user DAO. Every call hands out the same instance.
    #[must_use]
    pub fn user_dao(&self) -> Arc<dyn UserDao> {
        Arc::clone(&self.user_dao)
    }

    /// Checks the backing store, if there is one.
    pub async fn health_check(&self) -> UserMgmtResult<()> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(()),
        }
    }

    /// Releases the backing store.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl std::fmt::Debug for DaoFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaoFactory")
            .field("kind", &self.kind)
            .field("has_pool", &self.pool.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use usermgmt_core::{User, UserMgmtError};

    #[tokio::test]
    async fn test_missing_factory_is_not_initialized() {
        let err = DaoFactory::init(&DaoConfig::default(), &DatabaseConfig::in_memory())
            .await
            .unwrap_err();
        assert!(matches!(err, UserMgmtError::NotInitialized(_)));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_memory_factory_hands_out_one_instance() {
        let factory = DaoFactory::init(&DaoConfig::for_kind(DaoKind::Memory), &DatabaseConfig::default())
            .await
            .unwrap();
        assert_eq!(factory.kind(), DaoKind::Memory);

        let user = User::new("Jerry", "Smith", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        factory.user_dao().create(&user).await.unwrap();
        assert_eq!(factory.user_dao().find_all().await.unwrap().len(), 1);
        assert!(Arc::ptr_eq(&factory.user_dao(), &factory.user_dao()));
    }

    #[tokio::test]
    async fn test_reinit_discards_previous_store() {
        let config = DaoConfig::for_kind(DaoKind::Memory);
        let first = DaoFactory::init(&config, &DatabaseConfig::default()).await.unwrap();
        let user = User::new("Jerry", "Smith", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        first.user_dao().create(&user).await.unwrap();

        let second = DaoFactory::init(&config, &DatabaseConfig::default()).await.unwrap();
        assert!(second.user_dao().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_from_config_memory_without_fixture() {
        let mut config = AppConfig::default();
        config.dao = DaoConfig::for_kind(DaoKind::Memory);
        assert!(config.dao.fixture.is_none());

        let factory = DaoFactory::from_config(&config).await.unwrap();
        assert_eq!(factory.kind(), DaoKind::Memory);
        assert!(factory.user_dao().find_all().await.unwrap().is_empty());
        factory.health_check().await.unwrap();
        factory.close().await;
    }

    #[tokio::test]
    async fn test_memory_factory_rejects_duplicate_fixture_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 5, "first_name": "Morty", "last_name": "Smith", "date_of_birth": "1999-07-25"},
                {"id": 5, "first_name": "Summer", "last_name": "Smith", "date_of_birth": "2002-02-02"}
            ]"#,
        )
        .unwrap();

        let config = DaoConfig {
            fixture: Some(path),
            ..DaoConfig::for_kind(DaoKind::Memory)
        };
        let err = DaoFactory::init(&config, &DatabaseConfig::default()).await.unwrap_err();
        assert!(matches!(err, UserMgmtError::Database(_)));
    }

    #[tokio::test]
    async fn test_sqlite_factory() {
        let factory = DaoFactory::init(&DaoConfig::for_kind(DaoKind::Sqlite), &DatabaseConfig::in_memory())
            .await
            .unwrap();
        assert_eq!(factory.kind(), DaoKind::Sqlite);
        factory.health_check().await.unwrap();
        assert!(factory.user_dao().find_all().await.unwrap().is_empty());
        factory.close().await;
    }
}
