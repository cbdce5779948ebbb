//! # Domain Types
//!
//! Core domain types for the todos application.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │      List       │ 1    n │      Todo       │                         │
//! │  │  ─────────────  │◄───────│  ─────────────  │                         │
//! │  │  id (i64)       │        │  id (i64)       │                         │
//! │  │  title (unique) │        │  title          │                         │
//! │  │  todos (Vec)    │        │  completed      │                         │
//! │  └─────────────────┘        │  list_id (FK)   │                         │
//! │                             └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are assigned by the store on insert. A `List`'s `todos` field is
//! never stored; it is populated on every read from the `todos` table.

use serde::{Deserialize, Serialize};

// =============================================================================
// List
// =============================================================================

/// A named collection of todo items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct List {
    /// Unique identifier, assigned by the store.
    pub id: i64,

    /// Display title. Unique across all lists.
    pub title: String,

    /// Todos belonging to this list, populated on read.
    /// Not a column; always empty on a freshly inserted list.
    #[serde(default)]
    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub todos: Vec<Todo>,
}

impl List {
    /// Number of todos not yet completed.
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// Whether every todo in the list is completed.
    ///
    /// An empty list counts as not done (nothing to complete).
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|t| t.completed)
    }
}

// =============================================================================
// Todo
// =============================================================================

/// A single task entry belonging to exactly one list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Todo {
    /// Unique identifier, assigned by the store.
    pub id: i64,

    /// Display title.
    pub title: String,

    /// Whether the task has been completed. Defaults to false on insert.
    pub completed: bool,

    /// The list this todo belongs to. Deleting the list deletes the todo.
    pub list_id: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("todo {id}"),
            completed,
            list_id: 1,
        }
    }

    #[test]
    fn test_remaining_counts_open_todos() {
        let list = List {
            id: 1,
            title: "groceries".to_string(),
            todos: vec![todo(1, true), todo(2, false), todo(3, false)],
        };
        assert_eq!(list.remaining(), 2);
    }

    #[test]
    fn test_empty_list_is_not_done() {
        let list = List {
            id: 1,
            title: "empty".to_string(),
            todos: vec![],
        };
        assert!(!list.is_done());
        assert_eq!(list.remaining(), 0);
    }

    #[test]
    fn test_all_completed_is_done() {
        let list = List {
            id: 1,
            title: "done".to_string(),
            todos: vec![todo(1, true), todo(2, true)],
        };
        assert!(list.is_done());
    }
}
