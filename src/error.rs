//! Error types for shelfgen

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No data: {0}")]
    NoData(String),

    #[error("Ambiguous result: {0}")]
    AmbiguousResult(String),

    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::NoData(_) => 2,
            AppError::AmbiguousResult(_) => 3,
            AppError::ReferentialIntegrity(_) => 4,
            AppError::Database(_) | AppError::Migration(_) => 5,
            AppError::Config(_) => 6,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
