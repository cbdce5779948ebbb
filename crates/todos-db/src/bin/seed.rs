//! # Seed Data Generator
//!
//! Populates the database with sample lists and todos for development, so
//! the web layer has something to render on a fresh checkout.
//!
//! ## Usage
//! ```bash
//! # Seed the default local database (todos.db)
//! cargo run -p todos-db --bin seed
//!
//! # Specify database path
//! cargo run -p todos-db --bin seed -- --db ./data/todos.db
//! ```

use std::env;

use todos_db::{Database, DbConfig, DbError};
use tracing_subscriber::EnvFilter;

/// Sample lists with their todos.
const SAMPLE_LISTS: &[(&str, &[&str])] = &[
    (
        "Groceries",
        &["Buy milk", "Buy eggs", "Bread", "Coffee beans"],
    ),
    (
        "Chores",
        &["Water the plants", "Vacuum the hallway", "Take out recycling"],
    ),
    ("Errands", &["Post office", "Pick up dry cleaning"]),
    ("Someday", &[]),
];

#[tokio::main]
async fn main() -> Result<(), DbError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let mut db_path = "todos.db".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Todos Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./todos.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Todos Seed Data Generator");
    println!("=========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected, schema ready");

    // Don't stack sample data on top of real data
    let existing = db.lists().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} lists", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut lists = 0;
    let mut todos = 0;

    for (title, items) in SAMPLE_LISTS {
        let list = db.lists().create(title).await?;
        lists += 1;

        for item in *items {
            db.todos().create(list.id, item).await?;
            todos += 1;
        }

        println!("  Created '{}' with {} todos", title, items.len());
    }

    println!();
    println!("✓ Seeded {} lists, {} todos", lists, todos);

    Ok(())
}
