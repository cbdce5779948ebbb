//! # Database Pool Management
//!
//! Connection pool creation and configuration for SQLite.
//!
//! The concurrency contract of the store is a fixed-size pool with one
//! connection checked out per call. The [`Database`] handle is cheap to
//! clone; concurrent callers each acquire their own connection and no
//! statement interleaving happens on a shared connection.
//!
//! ## WAL Mode
//! File databases run in WAL (Write-Ahead Logging) journal mode so readers
//! and writers don't block each other. In-memory databases (tests) skip it.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::list::ListRepository;
use crate::repository::todo::TodoRepository;
use crate::schema;

/// Database file used outside of production.
const LOCAL_DB_FILE: &str = "todos.db";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/var/lib/todos/todos.db")
///     .max_connections(5)
///     .min_connections(1);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    pub min_connections: u32,

    /// How long to wait for a free connection before failing the call.
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection above the minimum.
    pub idle_timeout: Duration,

    /// Whether to run the schema bootstrap on connect.
    pub ensure_schema: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// The file is created on first connect if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            ensure_schema: true,
        }
    }

    /// Builds the configuration from the process environment.
    ///
    /// Deployment-mode selection:
    /// - `TODOS_ENV=production`: the connection target comes from
    ///   `DATABASE_URL` (a path, or a `sqlite://` URL whose scheme is
    ///   stripped). Missing `DATABASE_URL` is a startup error.
    /// - otherwise: the fixed local file `todos.db`.
    pub fn from_env() -> DbResult<Self> {
        if std::env::var("TODOS_ENV").as_deref() == Ok("production") {
            let url = std::env::var("DATABASE_URL").map_err(|_| {
                DbError::ConnectionFailed(
                    "DATABASE_URL must be set when TODOS_ENV=production".to_string(),
                )
            })?;
            let path = url.strip_prefix("sqlite://").unwrap_or(&url).to_string();
            Ok(DbConfig::new(path))
        } else {
            Ok(DbConfig::new(LOCAL_DB_FILE))
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the acquire timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run the schema bootstrap on connect.
    pub fn ensure_schema(mut self, run: bool) -> Self {
        self.ensure_schema = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// In-memory SQLite databases exist per connection, so the pool is
    /// pinned to a single connection to keep a consistent view.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            ensure_schema: true,
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(":memory:")
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// Constructed once at startup and passed by reference (or cloned) to
/// callers; there is no process-wide singleton.
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::new(DbConfig::from_env()?).await?;
/// let lists = db.lists().all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl Database {
    /// Creates a new database connection pool.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Enables foreign keys on every connection (the cascade-delete
    ///    invariant between lists and todos depends on it)
    /// 3. Creates the connection pool
    /// 4. Runs the schema bootstrap (if enabled)
    ///
    /// ## Errors
    /// `DbError::ConnectionFailed` if the pool cannot be opened; schema
    /// bootstrap failures propagate as `DbError::SchemaSetup`.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let connect_url = if config.is_in_memory() {
            "sqlite::memory:".to_string()
        } else {
            // sqlite://path plus mode=rwc creates the file if not exists
            format!("sqlite://{}?mode=rwc", config.database_path.display())
        };

        let mut connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            // SQLite ships with foreign keys disabled for backwards
            // compatibility; ON DELETE CASCADE needs them on
            .foreign_keys(true)
            .create_if_missing(true);

        if !config.is_in_memory() {
            connect_options = connect_options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database { pool };

        if config.ensure_schema {
            db.ensure_schema().await?;
        }

        Ok(db)
    }

    /// Runs the idempotent schema bootstrap.
    ///
    /// Called automatically by [`Database::new`] unless disabled in the
    /// config; safe to call again at any time.
    pub async fn ensure_schema(&self) -> DbResult<()> {
        schema::ensure_schema(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    ///
    /// For advanced queries not covered by repositories. Prefer the
    /// repository methods when available.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the list repository.
    pub fn lists(&self) -> ListRepository {
        ListRepository::new(self.pool.clone())
    }

    /// Returns the todo repository.
    pub fn todos(&self) -> TodoRepository {
        TodoRepository::new(self.pool.clone())
    }

    /// Closes the database connection pool.
    ///
    /// After calling close, all repository operations will fail.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let config = DbConfig::in_memory();
        let db = Database::new(config).await.unwrap();

        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .max_connections(10)
            .min_connections(2)
            .ensure_schema(false);

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert!(!config.ensure_schema);
    }

    // Single test for both environment branches: env vars are process-wide
    // and parallel tests would race on them.
    #[test]
    fn test_config_from_env() {
        std::env::remove_var("TODOS_ENV");
        let config = DbConfig::from_env().unwrap();
        assert_eq!(config.database_path, PathBuf::from(LOCAL_DB_FILE));

        std::env::set_var("TODOS_ENV", "production");
        std::env::remove_var("DATABASE_URL");
        assert!(DbConfig::from_env().is_err());

        std::env::set_var("DATABASE_URL", "sqlite:///var/lib/todos/todos.db");
        let config = DbConfig::from_env().unwrap();
        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/todos/todos.db")
        );

        std::env::remove_var("TODOS_ENV");
        std::env::remove_var("DATABASE_URL");
    }
}
