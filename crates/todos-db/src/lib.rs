//! # todos-db: Database Layer for the Todos App
//!
//! This crate provides database access for the todos application. It uses
//! SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Todos Data Flow                                 │
//! │                                                                         │
//! │  Web request handler (create_list, set_todo_status, ...)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     todos-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │◄───│ (list, todo)  │    │  (schema.rs) │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (todos.db, or DATABASE_URL in production)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Idempotent schema bootstrap (no migration framework)
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (list, todo)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use todos_db::{Database, DbConfig};
//!
//! // Environment-selected target: DATABASE_URL in production,
//! // the local todos.db file otherwise.
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let list = db.lists().create("Groceries").await?;
//! db.todos().create(list.id, "Buy milk").await?;
//! let lists = db.lists().all().await?;
//! ```

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::list::ListRepository;
pub use repository::todo::TodoRepository;
