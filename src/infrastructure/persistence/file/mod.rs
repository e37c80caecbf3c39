//! # File Exchange Repository
//!
//! Reads one JSON snapshot per exchange from a data directory.
//!
//! Only `*.json` files directly inside the directory are read, in file-name
//! order, which fixes the exchange enumeration order. Any unreadable or
//! invalid file fails the whole load; a half-loaded market is never served.

pub mod snapshot;

use crate::domain::entities::Exchange;
use crate::infrastructure::persistence::traits::{
    ExchangeRepository, RepositoryError, RepositoryResult,
};
use parking_lot::RwLock;
use snapshot::ExchangeSnapshot;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Exchange repository backed by a directory of JSON snapshots.
///
/// The directory is read once on [`FileExchangeRepository::open`] and again
/// on each [`FileExchangeRepository::reload`]. Reads in between are served
/// from memory.
#[derive(Debug, Clone)]
pub struct FileExchangeRepository {
    directory: PathBuf,
    exchanges: Arc<RwLock<Vec<Exchange>>>,
}

impl FileExchangeRepository {
    /// Loads every snapshot in `directory`.
    ///
    /// # Errors
    ///
    /// - `RepositoryError::Io` if the directory or a file cannot be read
    /// - `RepositoryError::Parse` if a file is not a valid snapshot
    /// - `RepositoryError::Invalid` if a snapshot holds rejected values or
    ///   repeats an exchange id
    pub fn open(directory: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let directory = directory.into();
        let exchanges = load_directory(&directory)?;
        Ok(Self {
            directory,
            exchanges: Arc::new(RwLock::new(exchanges)),
        })
    }

    /// Re-reads the directory, keeping the previous data on failure.
    ///
    /// Returns the number of exchanges loaded.
    ///
    /// # Errors
    ///
    /// Same as [`FileExchangeRepository::open`].
    pub fn reload(&self) -> RepositoryResult<usize> {
        let exchanges = load_directory(&self.directory)?;
        let count = exchanges.len();
        *self.exchanges.write() = exchanges;
        Ok(count)
    }

    /// The data directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the number of loaded exchanges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exchanges.read().len()
    }

    /// Returns true if no exchanges were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ExchangeRepository for FileExchangeRepository {
    fn exchanges(&self) -> RepositoryResult<Vec<Exchange>> {
        Ok(self.exchanges.read().clone())
    }

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.len())
    }
}

/// Snapshot files in `directory`, sorted by file name.
fn snapshot_paths(directory: &Path) -> RepositoryResult<Vec<PathBuf>> {
    let entries = fs::read_dir(directory).map_err(|e| RepositoryError::io(directory, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| RepositoryError::io(directory, e))?.path();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn load_file(path: &Path) -> RepositoryResult<Exchange> {
    let contents = fs::read_to_string(path).map_err(|e| RepositoryError::io(path, e))?;
    let snapshot: ExchangeSnapshot =
        serde_json::from_str(&contents).map_err(|e| RepositoryError::parse(path, e))?;
    snapshot
        .into_exchange()
        .map_err(|e| RepositoryError::invalid(path, e))
}

fn load_directory(directory: &Path) -> RepositoryResult<Vec<Exchange>> {
    let paths = snapshot_paths(directory)?;
    let mut seen = HashSet::new();
    let mut exchanges = Vec::with_capacity(paths.len());

    for path in &paths {
        let exchange = load_file(path)?;
        if !seen.insert(exchange.id().clone()) {
            return Err(RepositoryError::invalid(
                path,
                format!("duplicate exchange id {}", exchange.id()),
            ));
        }
        debug!(
            path = %path.display(),
            exchange = %exchange.id(),
            bids = exchange.order_book().bids().len(),
            asks = exchange.order_book().asks().len(),
            "loaded exchange snapshot"
        );
        exchanges.push(exchange);
    }

    info!(
        directory = %directory.display(),
        exchanges = exchanges.len(),
        "exchange snapshots loaded"
    );
    Ok(exchanges)
}
