//! # carservice-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `carservice-app::ports::storage`
//! - Own the single store connection for the process lifetime (open and close)
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `carservice-app` (for port traits) and `carservice-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod car_repo;
pub mod error;
pub mod pool;
pub mod service_repo;

pub use car_repo::SqliteCarRepository;
pub use pool::{Config, Database};
pub use service_repo::SqliteServiceRecordRepository;
