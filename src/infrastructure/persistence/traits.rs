//! # Repository Traits
//!
//! The exchange data source port.
//!
//! The planner only ever asks for the full set of exchanges; it has no
//! notion of looking one up by id. Implementations return owned
//! snapshots so a call never holds a lock or a file handle while planning.
//!
//! # Examples
//!
//! ```
//! use crypto_order_planner::infrastructure::persistence::{
//!     ExchangeRepository, InMemoryExchangeRepository,
//! };
//!
//! let repo = InMemoryExchangeRepository::new();
//! assert!(repo.exchanges().unwrap().is_empty());
//! ```

use crate::domain::entities::Exchange;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A snapshot could not be read.
    #[error("failed to read {path}: {message}")]
    Io {
        /// Offending path.
        path: String,
        /// Underlying error.
        message: String,
    },

    /// A snapshot is not valid JSON or has the wrong shape.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// Offending path.
        path: String,
        /// Underlying error.
        message: String,
    },

    /// A snapshot parsed but holds values the model rejects.
    #[error("invalid exchange data in {path}: {message}")]
    Invalid {
        /// Offending path.
        path: String,
        /// What was wrong.
        message: String,
    },

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates an I/O error for `path`.
    #[must_use]
    pub fn io(path: &Path, message: impl fmt::Display) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a parse error for `path`.
    #[must_use]
    pub fn parse(path: &Path, message: impl fmt::Display) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a validation error for `path`.
    #[must_use]
    pub fn invalid(path: &Path, message: impl fmt::Display) -> Self {
        Self::Invalid {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The file the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::Invalid { path, .. } => {
                Some(path)
            }
            Self::Internal(_) => None,
        }
    }

    /// Returns true if the underlying data was malformed rather than unreadable.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Invalid { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Source of exchange snapshots.
///
/// Exchanges are returned in a stable order; that order breaks price ties
/// during allocation.
pub trait ExchangeRepository: Send + Sync + fmt::Debug {
    /// Returns every known exchange.
    ///
    /// # Errors
    ///
    /// Returns a `RepositoryError` if the backing data cannot be loaded.
    fn exchanges(&self) -> RepositoryResult<Vec<Exchange>>;

    /// Number of known exchanges.
    ///
    /// # Errors
    ///
    /// Same as [`ExchangeRepository::exchanges`].
    fn count(&self) -> RepositoryResult<usize> {
        self.exchanges().map(|exchanges| exchanges.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn errors_name_the_file() {
        let path = PathBuf::from("data/exchange-01.json");
        let err = RepositoryError::parse(&path, "expected value at line 1");
        assert!(err.to_string().contains("exchange-01.json"));
        assert_eq!(err.path(), Some("data/exchange-01.json"));
        assert!(err.is_data_error());
    }

    #[test]
    fn io_errors_are_not_data_errors() {
        let err = RepositoryError::io(Path::new("missing"), "not found");
        assert!(!err.is_data_error());
        assert!(err.to_string().starts_with("failed to read missing"));
    }

    #[test]
    fn internal_error_has_no_path() {
        let err = RepositoryError::internal("poisoned");
        assert_eq!(err.path(), None);
        assert!(err.to_string().contains("poisoned"));
    }
}
