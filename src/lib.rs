//! Shelfgen - synthetic library catalog seeder and reporter
//!
//! Seeds an SQLite catalog of authors and books joined by a many-to-many
//! junction table, then runs aggregate reports over the populated store.

pub mod config;
pub mod datagen;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Embedded schema migrations (idempotent create-if-not-exists DDL).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
