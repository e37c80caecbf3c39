//! # In-Memory Exchange Repository
//!
//! In-memory implementation of [`ExchangeRepository`] for tests and
//! embedding.

use crate::domain::entities::Exchange;
use crate::domain::value_objects::ExchangeId;
use crate::infrastructure::persistence::traits::{ExchangeRepository, RepositoryResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory implementation of [`ExchangeRepository`].
///
/// Keeps exchanges in insertion order. Inserting an exchange whose id is
/// already present replaces it in place, so the tie-break order stays put.
#[derive(Debug, Clone)]
pub struct InMemoryExchangeRepository {
    storage: Arc<RwLock<Vec<Exchange>>>,
}

impl InMemoryExchangeRepository {
    /// Creates a new empty in-memory exchange repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a repository holding `exchanges`, later duplicates winning.
    #[must_use]
    pub fn with_exchanges(exchanges: impl IntoIterator<Item = Exchange>) -> Self {
        let repo = Self::new();
        for exchange in exchanges {
            repo.insert(exchange);
        }
        repo
    }

    /// Adds an exchange, replacing any existing one with the same id.
    ///
    /// Returns the replaced exchange, if any.
    pub fn insert(&self, exchange: Exchange) -> Option<Exchange> {
        let mut storage = self.storage.write();
        match storage.iter_mut().find(|e| e.id() == exchange.id()) {
            Some(slot) => Some(std::mem::replace(slot, exchange)),
            None => {
                storage.push(exchange);
                None
            }
        }
    }

    /// Swaps in a whole new snapshot.
    pub fn replace(&self, exchanges: Vec<Exchange>) {
        *self.storage.write() = exchanges;
    }

    /// Removes an exchange by id. Returns true if it was present.
    pub fn remove(&self, id: &ExchangeId) -> bool {
        let mut storage = self.storage.write();
        let before = storage.len();
        storage.retain(|e| e.id() != id);
        storage.len() != before
    }

    /// Gets an exchange by id.
    #[must_use]
    pub fn get(&self, id: &ExchangeId) -> Option<Exchange> {
        self.storage.read().iter().find(|e| e.id() == id).cloned()
    }

    /// Returns the number of exchanges in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all exchanges from the repository.
    pub fn clear(&self) {
        self.storage.write().clear();
    }
}

impl Default for InMemoryExchangeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeRepository for InMemoryExchangeRepository {
    fn exchanges(&self) -> RepositoryResult<Vec<Exchange>> {
        Ok(self.storage.read().clone())
    }

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::{AvailableFunds, OrderBook};
    use crate::domain::value_objects::Balance;
    use rust_decimal::Decimal;

    fn create_test_exchange(id: &str, euro: i64) -> Exchange {
        Exchange::new(
            ExchangeId::new(id),
            AvailableFunds::new(Balance::zero(), Balance::new(Decimal::from(euro)).unwrap()),
            OrderBook::default(),
        )
    }

    #[test]
    fn new_repository_is_empty() {
        let repo = InMemoryExchangeRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.exchanges().unwrap().is_empty());
    }

    #[test]
    fn insert_keeps_order() {
        let repo = InMemoryExchangeRepository::new();
        repo.insert(create_test_exchange("ex-b", 1));
        repo.insert(create_test_exchange("ex-a", 1));

        let ids: Vec<String> = repo
            .exchanges()
            .unwrap()
            .iter()
            .map(|e| e.id().to_string())
            .collect();
        assert_eq!(ids, vec!["ex-b", "ex-a"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let repo = InMemoryExchangeRepository::with_exchanges([
            create_test_exchange("ex-1", 1),
            create_test_exchange("ex-2", 2),
        ]);

        let replaced = repo.insert(create_test_exchange("ex-1", 100));

        assert_eq!(replaced.unwrap().available_funds().euro().get(), Decimal::ONE);
        assert_eq!(repo.len(), 2);
        let first = repo.exchanges().unwrap().into_iter().next().unwrap();
        assert_eq!(first.id().as_str(), "ex-1");
        assert_eq!(first.available_funds().euro().get(), Decimal::from(100));
    }

    #[test]
    fn get_and_remove() {
        let repo = InMemoryExchangeRepository::with_exchanges([create_test_exchange("ex-1", 1)]);
        let id = ExchangeId::new("ex-1");

        assert!(repo.get(&id).is_some());
        assert!(repo.remove(&id));
        assert!(!repo.remove(&id));
        assert!(repo.get(&id).is_none());
    }

    #[test]
    fn replace_and_clear() {
        let repo = InMemoryExchangeRepository::new();
        repo.replace(vec![create_test_exchange("ex-1", 1), create_test_exchange("ex-2", 1)]);
        assert_eq!(repo.len(), 2);

        repo.clear();
        assert!(repo.is_empty());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_writes() {
        let repo = InMemoryExchangeRepository::with_exchanges([create_test_exchange("ex-1", 1)]);
        let snapshot = repo.exchanges().unwrap();

        repo.clear();

        assert_eq!(snapshot.len(), 1);
        assert!(repo.is_empty());
    }

    #[test]
    fn clones_share_storage() {
        let repo = InMemoryExchangeRepository::new();
        let handle = repo.clone();
        handle.insert(create_test_exchange("ex-1", 1));
        assert_eq!(repo.len(), 1);
    }
}
