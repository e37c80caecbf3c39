//! # Infrastructure Layer
//!
//! Adapters around the domain: exchange data sources, configuration and
//! logging.

pub mod config;
pub mod logging;
pub mod persistence;
