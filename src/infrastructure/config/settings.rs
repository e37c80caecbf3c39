//! # Settings
//!
//! Layered configuration for the planner binaries.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a TOML file (`config/planner.toml` if present, or an explicit path)
//! 3. environment variables `PLANNER__<SECTION>__<KEY>`, e.g.
//!    `PLANNER__SERVER__PORT=9000`
//!
//! A `.env` file in the working directory is loaded into the environment
//! before the sources are read.
//!
//! # Examples
//!
//! ```no_run
//! use crypto_order_planner::infrastructure::config::Settings;
//!
//! let settings = Settings::load(None).unwrap();
//! println!("serving on {}", settings.server.address());
//! ```

use crate::application::error::InfrastructureError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// File read when no explicit path is given. Missing is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "config/planner.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "PLANNER";

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl ServerSettings {
    /// `host:port` as accepted by `TcpListener::bind`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Exchange data settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    /// Directory holding one JSON snapshot per exchange.
    pub directory: PathBuf,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging settings. `RUST_LOG`, when set, overrides `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive, e.g. `info` or `crypto_order_planner=debug`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

/// All planner settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP listener.
    pub server: ServerSettings,
    /// Exchange data.
    pub data: DataSettings,
    /// Logging.
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            data: DataSettings {
                directory: PathBuf::from("data"),
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}

impl Settings {
    /// Loads settings from defaults, the config file and the environment.
    ///
    /// With `path` set the file must exist; otherwise
    /// [`DEFAULT_CONFIG_FILE`] is read if present.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` if a source cannot be
    /// read or the merged result is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, InfrastructureError> {
        match dotenvy::dotenv() {
            Err(e) if !e.not_found() => {
                return Err(InfrastructureError::configuration(format!(
                    "failed to load .env: {e}"
                )));
            }
            _ => {}
        }

        let (file, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let builder = Self::defaults_builder()?
            .add_source(File::from(file.as_path()).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder.build())
    }

    /// Parses settings from TOML text layered over the defaults only.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` on malformed or invalid
    /// input.
    pub fn from_toml_str(toml: &str) -> Result<Self, InfrastructureError> {
        let builder = Self::defaults_builder()?.add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder.build())
    }

    /// Checks values the types alone cannot.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` describing the first
    /// invalid value.
    pub fn validate(&self) -> Result<(), InfrastructureError> {
        if self.server.host.trim().is_empty() {
            return Err(InfrastructureError::configuration(
                "server.host must not be empty",
            ));
        }
        if self.data.directory.as_os_str().is_empty() {
            return Err(InfrastructureError::configuration(
                "data.directory must not be empty",
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(InfrastructureError::configuration(
                "logging.level must not be empty",
            ));
        }
        Ok(())
    }

    fn defaults_builder()
    -> Result<config::ConfigBuilder<config::builder::DefaultState>, InfrastructureError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)
            .and_then(|b| b.set_default("server.port", i64::from(defaults.server.port)))
            .and_then(|b| {
                b.set_default(
                    "data.directory",
                    defaults.data.directory.display().to_string(),
                )
            })
            .and_then(|b| b.set_default("logging.level", defaults.logging.level))
            .and_then(|b| b.set_default("logging.format", defaults.logging.format.to_string()))
            .map_err(|e| InfrastructureError::configuration(e.to_string()))
    }

    fn finish(built: Result<Config, config::ConfigError>) -> Result<Self, InfrastructureError> {
        let settings: Self = built
            .and_then(Config::try_deserialize)
            .map_err(|e| InfrastructureError::configuration(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }
}
