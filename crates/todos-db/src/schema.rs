//! # Schema Bootstrap
//!
//! Idempotent table creation for the todos store.
//!
//! There is no migration framework and no schema versioning: on every
//! startup each table's existence is checked against the catalog
//! (`sqlite_master`) and the table is created only if absent. Re-running is
//! safe and produces no duplicate tables.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// `lists` holds one row per named collection.
const CREATE_LISTS: &str = r#"
CREATE TABLE lists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE
)
"#;

/// `todos` holds one row per task, owned by a list. Deleting the list
/// cascades to its todos (enforced only with foreign keys enabled on the
/// connection, which the pool guarantees).
const CREATE_TODOS: &str = r#"
CREATE TABLE todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    list_id INTEGER NOT NULL REFERENCES lists (id) ON DELETE CASCADE
)
"#;

/// Ensures the `lists` and `todos` tables exist.
///
/// Each statement runs in its own implicit transaction (autocommit); a
/// failure surfaces as [`DbError::SchemaSetup`] and aborts startup.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking database schema");

    if !table_exists(pool, "lists").await? {
        sqlx::query(CREATE_LISTS)
            .execute(pool)
            .await
            .map_err(|e| DbError::SchemaSetup(e.to_string()))?;
        info!("Created table: lists");
    } else {
        debug!("Table lists already present");
    }

    if !table_exists(pool, "todos").await? {
        sqlx::query(CREATE_TODOS)
            .execute(pool)
            .await
            .map_err(|e| DbError::SchemaSetup(e.to_string()))?;
        info!("Created table: todos");
    } else {
        debug!("Table todos already present");
    }

    Ok(())
}

/// Checks the catalog for a table with the given name.
async fn table_exists(pool: &SqlitePool, name: &str) -> DbResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .map_err(|e| DbError::SchemaSetup(e.to_string()))?;

    Ok(count > 0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_bootstrap_creates_tables() {
        // ensure_schema(false): drive the bootstrap by hand
        let db = Database::new(DbConfig::in_memory().ensure_schema(false))
            .await
            .unwrap();

        assert!(!table_exists(db.pool(), "lists").await.unwrap());
        assert!(!table_exists(db.pool(), "todos").await.unwrap());

        ensure_schema(db.pool()).await.unwrap();

        assert!(table_exists(db.pool(), "lists").await.unwrap());
        assert!(table_exists(db.pool(), "todos").await.unwrap());
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Database::new already ran it once; run it twice more
        ensure_schema(db.pool()).await.unwrap();
        ensure_schema(db.pool()).await.unwrap();

        // Still exactly one table of each name in the catalog
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('lists', 'todos')",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(count, 2);
    }
}
