//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `TODO_LIST_*` environment variables, CLI flags, or a
//! configuration file, in the precedence OrthoConfig applies.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Deployment flavour. Development builds expose internal error text in 500
/// responses; production replaces it with a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeEnvironment {
    Development,
    #[default]
    Production,
}

impl RuntimeEnvironment {
    #[must_use]
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for RuntimeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
        })
    }
}

impl FromStr for RuntimeEnvironment {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(SettingsError::UnknownEnvironment {
                value: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address `{value}`: {message}")]
    InvalidBindAddr { value: String, message: String },
    #[error("unknown environment `{value}`; expected development or production")]
    UnknownEnvironment { value: String },
    #[error("db_max_connections must be at least 1")]
    ZeroConnections,
}

/// Settings for the todo list service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO_LIST")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without one the service keeps items in
    /// memory.
    pub database_url: Option<String>,
    /// `development` or `production`.
    pub environment: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl AppSettings {
    /// Configured bind address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| {
            SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            }
        })
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Configured environment, defaulting to production.
    ///
    /// # Errors
    /// Returns [`SettingsError::UnknownEnvironment`] for unrecognised names.
    pub fn environment(&self) -> Result<RuntimeEnvironment, SettingsError> {
        self.environment
            .as_deref()
            .map_or(Ok(RuntimeEnvironment::default()), str::parse)
    }

    /// # Errors
    /// Returns [`SettingsError::ZeroConnections`] when configured as zero.
    pub fn db_max_connections(&self) -> Result<u32, SettingsError> {
        match self.db_max_connections {
            0 => Err(SettingsError::ZeroConnections),
            value => Ok(value),
        }
    }
}
