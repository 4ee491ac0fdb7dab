//! Layered application configuration.
//!
//! Values are resolved from, lowest precedence first: built-in defaults, an
//! optional TOML file, and `TASKDESK__`-prefixed environment variables using
//! `__` as the section separator (for example
//! `TASKDESK__DATABASE__URL`). The file path comes from `TASKDESK_CONFIG`
//! and defaults to `taskdesk.toml`.

use crate::access::StatusChangeRule;
use ::config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "TASKDESK_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "taskdesk.toml";

const ENV_PREFIX: &str = "TASKDESK";
const ENV_SEPARATOR: &str = "__";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Complete process configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Storage settings.
    pub database: DatabaseConfig,
    /// Bearer token settings.
    pub auth: AuthConfig,
    /// Access rule settings.
    pub access: AccessConfig,
    /// Startup seeding settings.
    pub bootstrap: BootstrapConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_owned(),
        }
    }
}

/// Storage settings. Without a URL the process runs on in-memory stores.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: Option<String>,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Bearer token settings.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC secret for signing tokens.
    pub jwt_secret: String,
    /// Token lifetime in minutes.
    pub token_ttl_minutes: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_minutes: 60,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

/// Access rule settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Who may move tasks between statuses.
    pub status_change: StatusChangeRule,
}

/// Startup seeding settings.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Username of the administrator created on first start.
    pub admin_username: Option<String>,
    /// Password of that administrator.
    pub admin_password: Option<String>,
    /// Load the demo data set into empty stores.
    pub demo_data: bool,
}

impl fmt::Debug for BootstrapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapConfig")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &self.admin_password.as_ref().map(|_| "<redacted>"))
            .field("demo_data", &self.demo_data)
            .finish()
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the file named by `TASKDESK_CONFIG` and the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source is malformed or validation
    /// fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit file path and the process
    /// environment. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source is malformed or validation
    /// fails.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let loaded: Self = Config::builder()
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Parses configuration from TOML text alone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is malformed or validation
    /// fails.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let loaded: Self = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty token secret, a zero
    /// token lifetime, a zero pool size, or a half-configured bootstrap
    /// administrator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Invalid("auth.jwt_secret must be set".to_owned()));
        }
        if self.auth.token_ttl_minutes == 0 {
            return Err(ConfigError::Invalid(
                "auth.token_ttl_minutes must be positive".to_owned(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be positive".to_owned(),
            ));
        }
        if self.bootstrap.admin_username.is_some() != self.bootstrap.admin_password.is_some() {
            return Err(ConfigError::Invalid(
                "bootstrap.admin_username and bootstrap.admin_password must be set together"
                    .to_owned(),
            ));
        }
        Ok(())
    }
}
