//! API configuration
//!
//! Values come from the process environment. `DB_URI` names the database;
//! everything else is optional and read with the `LOANS_` prefix.

use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;
use std::num::NonZeroUsize;

use core_kernel::CoreError;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8081;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: Option<String>,
    /// Log level
    pub log_level: String,
    /// Log output format: "text" or "json"
    pub log_format: String,
    /// Runtime worker threads; defaults to the available parallelism
    pub workers: Option<usize>,
    /// Database pool size
    pub max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            database_url: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            workers: None,
            max_connections: 10,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Loads configuration from an explicit variable set
    ///
    /// `DB_URI` takes precedence over `LOANS_DATABASE_URL`, which takes
    /// precedence over `DATABASE_URL`.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let mut builder = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", defaults.log_format)?
            .set_default("max_connections", i64::from(defaults.max_connections))?;

        if let Some(url) = vars.get("DATABASE_URL") {
            builder = builder.set_default("database_url", url.clone())?;
        }

        builder
            .add_source(
                Environment::with_prefix("LOANS")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("database_url", vars.get("DB_URI").cloned())?
            .build()?
            .try_deserialize()
    }

    /// Returns the database URL, which has no default
    pub fn database_url(&self) -> Result<&str, CoreError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| CoreError::configuration("DB_URI is not set"))
    }

    /// Whether logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// Number of runtime worker threads to start
    pub fn worker_threads(&self) -> usize {
        self.workers
            .filter(|&n| n > 0)
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(NonZeroUsize::get)
                    .unwrap_or(1)
            })
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
