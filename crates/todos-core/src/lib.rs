//! # todos-core: Pure Domain Types for the Todos App
//!
//! This crate contains the domain model of the todos application as pure
//! types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Todos Data Flow                                  │
//! │                                                                         │
//! │  Web request layer (routes, templates - separate crate)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ★ todos-core (THIS CRATE) ★                                           │
//! │    List / Todo types, title validation                                 │
//! │    NO I/O • NO DATABASE • NO NETWORK                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  todos-db (Store: pool, schema bootstrap, repositories)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (List, Todo)
//! - [`error`] - Validation error types
//! - [`validation`] - Input validation for titles

pub mod error;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use types::{List, Todo};

/// Maximum length of a list or todo title, in characters.
///
/// The web layer enforces the same bound on its forms; the store relies on
/// callers validating before insert.
pub const MAX_TITLE_LEN: usize = 100;
