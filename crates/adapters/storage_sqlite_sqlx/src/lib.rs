//! # drivehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `drivehub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `drivehub-app` (for port traits) and `drivehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod driver_repo;
mod error;
mod pool;

pub use driver_repo::SqliteDriverRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
