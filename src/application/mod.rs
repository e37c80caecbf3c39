//! # Application Layer
//!
//! Use cases wiring the domain to its data source.

pub mod error;
pub mod services;
