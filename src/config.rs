//! Configuration management for shelfgen

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SeedConfig {
    /// Authors inserted by a plain `seed` run.
    pub authors: u32,
    /// Books inserted by a plain `seed` run.
    pub books: u32,
    /// Upper bound of the per-author book sample (inclusive).
    pub max_books_per_author: u32,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when unset.
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix SHELFGEN_)
            .add_source(
                Environment::with_prefix("SHELFGEN")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override database URL from DATABASE_URL env var if present
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://shelfgen.db".to_string(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            authors: 500,
            books: 1000,
            max_books_per_author: 5,
            rng_seed: None,
        }
    }
}
