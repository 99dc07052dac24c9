//! Runtime configuration.
//!
//! Values come from an optional `customers.toml` and are overridden by
//! `CUSTOMERS_`-prefixed environment variables, using `__` between sections
//! (`CUSTOMERS_SERVER__PORT=9000`). Every field has a default, so an empty
//! environment yields a runnable configuration.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

const CONFIG_FILE_BASENAME: &str = "customers";
const ENV_PREFIX: &str = "CUSTOMERS";

/// Database path that selects a private in-memory store.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file path, or `:memory:`.
    #[serde(default = "default_database_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Absolute directory for rolling log files; stderr when unset.
    #[serde(default)]
    pub dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_path() -> String {
    "customers.sqlite3".to_string()
}

fn default_log_level() -> String {
    customer_core::default_log_level().to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

/// `CUSTOMERS_SECTION__KEY` variables, read from the process environment.
fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl AppConfig {
    /// Loads `customers.toml` from the working directory if present, then
    /// applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            File::with_name(CONFIG_FILE_BASENAME).required(false),
            env_overrides(),
        )
    }

    /// Loads the given config file (which must exist), then applies
    /// environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true), env_overrides())
    }

    fn build<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<AppConfig>()
    }

    /// Returns `host:port` for the listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn is_in_memory(&self) -> bool {
        self.database.path == IN_MEMORY_DATABASE
    }
}
