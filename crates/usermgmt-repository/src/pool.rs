//! Database connection pool management.

use async_trait::async_trait;
use shaku::{Component, Interface};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{info, warn};
use usermgmt_config::DatabaseConfig;
use usermgmt_core::{UserMgmtError, UserMgmtResult};

/// Interface for database pool operations.
///
/// This trait abstracts database pool functionality for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying SQLite pool.
    fn inner(&self) -> &SqlitePool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> UserMgmtResult<()>;

    /// Runs database migrations.
    async fn run_migrations(&self) -> UserMgmtResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
///
/// The pool is opened once when the DAO factory is built and held for the
/// life of the process.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    pub async fn new(config: &DatabaseConfig) -> UserMgmtResult<Self> {
        info!("Connecting to SQLite database at {}", config.url);

        // One connection always stays open; an in-memory database lives
        // only as long as its connection.
        let pool = SqlitePoolOptions::new()
            .min_connections(config.max_connections.min(1))
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                UserMgmtError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("SQLite connection pool established");
        Ok(Self { pool })
    }

    /// Opens the pool and applies migrations when the configuration asks for it.
    pub async fn connect(config: &DatabaseConfig) -> UserMgmtResult<Self> {
        let pool = Self::new(config).await?;
        if config.run_migrations {
            DatabasePoolInterface::run_migrations(&pool).await?;
        }
        Ok(pool)
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    async fn health_check(&self) -> UserMgmtResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| UserMgmtError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    async fn run_migrations(&self) -> UserMgmtResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}
