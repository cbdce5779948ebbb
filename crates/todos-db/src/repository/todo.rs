//! # Todo Repository
//!
//! Database operations for todos.
//!
//! Every operation that targets a single todo matches on `(list_id, id)`
//! rather than id alone, so a caller holding a stale or hostile todo id
//! can't reach into another list's rows.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use todos_core::Todo;

/// Repository for todo database operations.
#[derive(Debug, Clone)]
pub struct TodoRepository {
    pool: SqlitePool,
}

impl TodoRepository {
    /// Creates a new TodoRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TodoRepository { pool }
    }

    /// Inserts a new todo under the given list.
    ///
    /// The list's existence is not checked first; the insert itself fails
    /// with `DbError::ForeignKeyViolation` when `list_id` doesn't exist.
    ///
    /// ## Returns
    /// The created todo, id assigned by the store, completed false.
    pub async fn create(&self, list_id: i64, title: &str) -> DbResult<Todo> {
        debug!(list_id, title, "Creating todo");

        let result = sqlx::query("INSERT INTO todos (list_id, title) VALUES (?, ?)")
            .bind(list_id)
            .bind(title)
            .execute(&self.pool)
            .await?;

        Ok(Todo {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            completed: false,
            list_id,
        })
    }

    /// Deletes the todo matching both list and todo id.
    ///
    /// No match (wrong list, or no such todo) is a no-op.
    pub async fn delete(&self, list_id: i64, todo_id: i64) -> DbResult<()> {
        debug!(list_id, todo_id, "Deleting todo");

        let result = sqlx::query("DELETE FROM todos WHERE list_id = ? AND id = ?")
            .bind(list_id)
            .bind(todo_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(list_id, todo_id, "Delete matched no todo");
        }

        Ok(())
    }

    /// Sets the completed flag for the todo matching both ids.
    ///
    /// No match is a no-op.
    pub async fn set_completed(
        &self,
        list_id: i64,
        todo_id: i64,
        completed: bool,
    ) -> DbResult<()> {
        debug!(list_id, todo_id, completed, "Updating todo status");

        let result = sqlx::query("UPDATE todos SET completed = ? WHERE list_id = ? AND id = ?")
            .bind(completed)
            .bind(list_id)
            .bind(todo_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(list_id, todo_id, "Status update matched no todo");
        }

        Ok(())
    }

    /// Marks every todo under the list as completed.
    ///
    /// A list with no todos is a no-op.
    pub async fn complete_all(&self, list_id: i64) -> DbResult<()> {
        debug!(list_id, "Completing all todos in list");

        let result = sqlx::query("UPDATE todos SET completed = 1 WHERE list_id = ?")
            .bind(list_id)
            .execute(&self.pool)
            .await?;

        debug!(
            list_id,
            completed = result.rows_affected(),
            "Completed todos"
        );

        Ok(())
    }

    /// Fetches all todos belonging to a list.
    ///
    /// Used by the list repository to populate `List::todos`; an unknown
    /// list id simply yields an empty vector.
    pub async fn for_list(&self, list_id: i64) -> DbResult<Vec<Todo>> {
        let todos: Vec<Todo> =
            sqlx::query_as("SELECT id, title, completed, list_id FROM todos WHERE list_id = ?")
                .bind(list_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(todos)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_new_todo_starts_open() {
        let db = test_db().await;
        let list = db.lists().create("Groceries").await.unwrap();

        let todo = db.todos().create(list.id, "Buy milk").await.unwrap();
        assert!(!todo.completed);

        let fetched = db.lists().get(list.id).await.unwrap();
        assert_eq!(fetched.todos.len(), 1);
        assert_eq!(fetched.todos[0].title, "Buy milk");
        assert!(!fetched.todos[0].completed);
    }

    #[tokio::test]
    async fn test_create_under_missing_list_fails() {
        let db = test_db().await;

        let err = db.todos().create(999, "orphan").await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_set_completed_roundtrip() {
        let db = test_db().await;
        let list = db.lists().create("Groceries").await.unwrap();
        let todo = db.todos().create(list.id, "Buy milk").await.unwrap();

        db.todos()
            .set_completed(list.id, todo.id, true)
            .await
            .unwrap();

        let fetched = db.lists().get(list.id).await.unwrap();
        assert!(fetched.todos[0].completed);

        db.todos()
            .set_completed(list.id, todo.id, false)
            .await
            .unwrap();

        let fetched = db.lists().get(list.id).await.unwrap();
        assert!(!fetched.todos[0].completed);
    }

    #[tokio::test]
    async fn test_set_completed_wrong_list_is_noop() {
        let db = test_db().await;
        let a = db.lists().create("A").await.unwrap();
        let b = db.lists().create("B").await.unwrap();
        let todo = db.todos().create(a.id, "task").await.unwrap();

        // Matching on (list_id, id): the wrong list can't flip it
        db.todos().set_completed(b.id, todo.id, true).await.unwrap();

        let fetched = db.lists().get(a.id).await.unwrap();
        assert!(!fetched.todos[0].completed);
    }

    #[tokio::test]
    async fn test_delete_requires_both_ids_to_match() {
        let db = test_db().await;
        let a = db.lists().create("A").await.unwrap();
        let b = db.lists().create("B").await.unwrap();
        let todo = db.todos().create(a.id, "task").await.unwrap();

        // Wrong list: no-op
        db.todos().delete(b.id, todo.id).await.unwrap();
        assert_eq!(db.todos().for_list(a.id).await.unwrap().len(), 1);

        // Right list: gone
        db.todos().delete(a.id, todo.id).await.unwrap();
        assert!(db.todos().for_list(a.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_complete_all_scoped_to_list() {
        let db = test_db().await;
        let a = db.lists().create("A").await.unwrap();
        let b = db.lists().create("B").await.unwrap();
        db.todos().create(a.id, "a1").await.unwrap();
        db.todos().create(a.id, "a2").await.unwrap();
        db.todos().create(b.id, "b1").await.unwrap();

        db.todos().complete_all(a.id).await.unwrap();

        let a_todos = db.todos().for_list(a.id).await.unwrap();
        assert!(a_todos.iter().all(|t| t.completed));

        let b_todos = db.todos().for_list(b.id).await.unwrap();
        assert!(b_todos.iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn test_complete_all_on_empty_list_is_noop() {
        let db = test_db().await;
        let list = db.lists().create("Empty").await.unwrap();

        db.todos().complete_all(list.id).await.unwrap();
        assert!(db.todos().for_list(list.id).await.unwrap().is_empty());
    }
}
