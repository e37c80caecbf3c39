//! # Persistence Layer
//!
//! Exchange data sources.
//!
//! ## Port
//!
//! - [`ExchangeRepository`]: supplies exchange snapshots to the planner
//!
//! ## Implementations
//!
//! - [`InMemoryExchangeRepository`]: held in memory, mutable at runtime
//! - [`FileExchangeRepository`]: one JSON file per exchange in a directory

pub mod file;
pub mod in_memory;
pub mod traits;

pub use file::FileExchangeRepository;
pub use in_memory::InMemoryExchangeRepository;
pub use traits::{ExchangeRepository, RepositoryError, RepositoryResult};
