//! # Postdeck Infrastructure
//!
//! Concrete implementations of the ports defined in `postdeck-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL post store via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::DatabaseConnections;
pub use database::InMemoryPostRepository;

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
