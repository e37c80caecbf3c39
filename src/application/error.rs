//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures that can occur while planning: rejected
//! requests, unfillable requests, and data source or configuration failures.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)                 - Invalid or unfillable requests
//! ├── Repository(RepositoryError)         - Exchange data could not be loaded
//! ├── Infrastructure(InfrastructureError) - Configuration and runtime setup
//! └── Internal(String)                    - Anything else
//! ```
//!
//! # Examples
//!
//! ```
//! use crypto_order_planner::application::error::{ApplicationError, InfrastructureError};
//! use crypto_order_planner::domain::errors::DomainError;
//!
//! let err: ApplicationError = DomainError::invalid_request("amount must be positive").into();
//! assert!(err.is_invalid_request());
//!
//! let infra_err = InfrastructureError::configuration("missing data directory");
//! let app_err: ApplicationError = infra_err.into();
//! assert!(!app_err.is_retryable());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Infrastructure layer error.
///
/// Failures setting up the process around the planner.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network error, e.g. the listener could not bind.
    #[error("network error: {0}")]
    Network(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl InfrastructureError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from planning.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Exchange data source failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Infrastructure error from process setup.
    #[error("infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::Domain(DomainError::invalid_request(message))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the request itself was rejected.
    #[must_use]
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_invalid_request())
    }

    /// Returns true if books and balances could not cover the request.
    #[must_use]
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_insufficient_balance())
    }

    /// Returns true if the exchange data could not be loaded.
    #[must_use]
    pub fn is_data_source(&self) -> bool {
        matches!(self, Self::Repository(_))
    }

    /// Returns true if this error is retryable.
    ///
    /// Planning is deterministic over a snapshot, so neither planning
    /// failure is. A listener that could not bind is.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Infrastructure(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
