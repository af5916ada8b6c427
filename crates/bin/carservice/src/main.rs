//! # carservice — car service schedule
//!
//! Composition root that wires all adapters together and runs the menu.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging to stderr so it never mixes with the menu on stdout
//! - Open the single `SQLite` connection and run migrations, failing fast
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Run the interactive menu over stdin/stdout
//! - Release the connection on every way out of the menu
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io;

use carservice_adapter_menu::{App, Menu};
use carservice_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteCarRepository, SqliteServiceRecordRepository,
};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.logging.filter);

    // Database
    let db_config = DatabaseConfig {
        database_url: config.database_url().to_string(),
    };
    let db = match db_config.build().await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "database connection failed");
            eprintln!("Database connection failed: {err}");
            return Err(err.into());
        }
    };
    println!("Connected to the database.");
    let pool = db.pool().clone();

    // Repositories and services
    let app = App::new(
        SqliteCarRepository::new(pool.clone()),
        SqliteServiceRecordRepository::new(pool),
    );

    // Menu
    let stdin = io::stdin();
    let mut menu = Menu::new(&app, stdin.lock(), io::stdout());
    let outcome = menu.run().await;

    db.close().await;
    outcome?;
    Ok(())
}

fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();
}
