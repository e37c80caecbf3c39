//! # API Layer
//!
//! - [`rest`]: HTTP interface served by `planner-server`

pub mod rest;
