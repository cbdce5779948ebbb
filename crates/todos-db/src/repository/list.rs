//! # List Repository
//!
//! Database operations for lists.
//!
//! A list row is just `(id, title)`; the `todos` field of the returned
//! [`List`] is populated on every read with a follow-up query per list (one
//! query for the lists, one per list for its todos). Nothing orders the
//! lists; callers get them in whatever order the store returns.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::todo::TodoRepository;
use todos_core::List;

/// Repository for list database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ListRepository::new(pool);
///
/// let list = repo.create("Groceries").await?;
/// let all = repo.all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ListRepository {
    pool: SqlitePool,
}

impl ListRepository {
    /// Creates a new ListRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ListRepository { pool }
    }

    /// Fetches every list with its todos attached.
    ///
    /// ## Returns
    /// All lists, each carrying its full todos vector (empty for lists
    /// without todos). Order is unspecified.
    pub async fn all(&self) -> DbResult<Vec<List>> {
        debug!("Fetching all lists");

        let mut lists: Vec<List> = sqlx::query_as("SELECT id, title FROM lists")
            .fetch_all(&self.pool)
            .await?;

        let todos = TodoRepository::new(self.pool.clone());
        for list in &mut lists {
            list.todos = todos.for_list(list.id).await?;
        }

        debug!(count = lists.len(), "Fetched lists");
        Ok(lists)
    }

    /// Fetches one list by id, with its todos attached.
    ///
    /// ## Returns
    /// * `Ok(List)` - List found
    /// * `Err(DbError::NotFound)` - No list with that id
    pub async fn get(&self, list_id: i64) -> DbResult<List> {
        debug!(list_id, "Fetching list");

        let list: Option<List> = sqlx::query_as("SELECT id, title FROM lists WHERE id = ?")
            .bind(list_id)
            .fetch_optional(&self.pool)
            .await?;

        let mut list = list.ok_or_else(|| DbError::not_found("list", list_id))?;
        list.todos = TodoRepository::new(self.pool.clone()).for_list(list_id).await?;

        Ok(list)
    }

    /// Inserts a new list.
    ///
    /// ## Returns
    /// * `Ok(List)` - The created list, id assigned by the store, todos empty
    /// * `Err(DbError::UniqueViolation)` - Title already exists
    pub async fn create(&self, title: &str) -> DbResult<List> {
        debug!(title, "Creating list");

        let result = sqlx::query("INSERT INTO lists (title) VALUES (?)")
            .bind(title)
            .execute(&self.pool)
            .await?;

        Ok(List {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            todos: Vec::new(),
        })
    }

    /// Updates a list's title.
    ///
    /// A missing id is a no-op, indistinguishable from success for the
    /// caller; renaming to a title that already exists surfaces
    /// `DbError::UniqueViolation`.
    pub async fn rename(&self, list_id: i64, new_title: &str) -> DbResult<()> {
        debug!(list_id, new_title, "Renaming list");

        let result = sqlx::query("UPDATE lists SET title = ? WHERE id = ?")
            .bind(new_title)
            .bind(list_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(list_id, "Rename matched no list");
        }

        Ok(())
    }

    /// Deletes a list; the store cascades the delete to its todos.
    ///
    /// A missing id is a no-op.
    pub async fn delete(&self, list_id: i64) -> DbResult<()> {
        debug!(list_id, "Deleting list");

        let result = sqlx::query("DELETE FROM lists WHERE id = ?")
            .bind(list_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(list_id, "Delete matched no list");
        }

        Ok(())
    }

    /// Counts lists (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lists")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
