//! # In-Memory Repositories
//!
//! In-memory implementations for tests and embedding.
//!
//! ## Thread Safety
//!
//! Storage sits behind `Arc<parking_lot::RwLock<_>>`; readers get an owned
//! copy and never block writers for longer than the clone.

pub mod exchange_repository;

pub use exchange_repository::InMemoryExchangeRepository;
