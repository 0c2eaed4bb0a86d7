//! Database connection pool management.
//!
//! The pool is the connection provider every DAO receives. DAOs only see
//! [`DatabasePoolInterface`], so pool sizing never changes their contract.

use async_trait::async_trait;
use shaku::Component;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};
use workforce_config::DatabaseConfig;
use workforce_core::{Interface, WorkforceError, WorkforceResult};

/// Interface for database pool operations.
///
/// This trait abstracts database pool functionality for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying SQLite pool.
    fn inner(&self) -> &SqlitePool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> WorkforceResult<()>;

    /// Runs database migrations.
    async fn run_migrations(&self) -> WorkforceResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// Foreign keys are enforced on every connection. In-memory databases
    /// keep their connections open for the pool lifetime.
    pub async fn new(config: &DatabaseConfig) -> WorkforceResult<Self> {
        info!("Connecting to SQLite database...");

        let mut connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| WorkforceError::Configuration(format!("Invalid database URL: {}", e)))?
            .foreign_keys(true)
            .create_if_missing(true);
        if !config.log_queries {
            connect_options = connect_options.disable_statement_logging();
        }

        let mut pool_options = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout());
        pool_options = if config.is_in_memory() {
            pool_options
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            pool_options.idle_timeout(Some(config.idle_timeout()))
        };

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                WorkforceError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("SQLite connection pool established");
        Ok(Self { pool })
    }

    /// Opens a private in-memory database.
    pub async fn in_memory() -> WorkforceResult<Self> {
        Self::new(&DatabaseConfig::in_memory()).await
    }

    /// Creates DatabasePool with a pre-existing pool (for Shaku injection).
    #[must_use]
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    async fn health_check(&self) -> WorkforceResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| WorkforceError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    async fn run_migrations(&self) -> WorkforceResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| WorkforceError::Database(format!("Migration failed: {}", e)))?;
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
