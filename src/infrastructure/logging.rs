//! # Logging
//!
//! Installs the global `tracing` subscriber.
//!
//! `RUST_LOG` takes precedence over the configured level. Output goes to
//! stderr so the CLI can keep stdout for the plan itself.

use crate::application::error::InfrastructureError;
use crate::infrastructure::config::{LogFormat, LoggingSettings};
use tracing_subscriber::{EnvFilter, fmt};

/// Builds the filter: `RUST_LOG` if set and valid, else `settings.level`.
///
/// # Errors
///
/// Returns `InfrastructureError::Configuration` if the configured level is
/// not a valid filter directive.
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter, InfrastructureError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.level).map_err(|e| {
            InfrastructureError::configuration(format!(
                "invalid logging.level {:?}: {e}",
                settings.level
            ))
        }),
    }
}

/// Initialises logging for the process.
///
/// # Errors
///
/// Returns `InfrastructureError::Configuration` if the level is invalid or
/// a global subscriber is already installed.
pub fn init(settings: &LoggingSettings) -> Result<(), InfrastructureError> {
    let filter = env_filter(settings)?;
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let result = match settings.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    result.map_err(|e| InfrastructureError::configuration(format!("failed to init logging: {e}")))
}
