//! # Domain Layer
//!
//! Pure planning model with no I/O.
//!
//! - [`value_objects`]: decimal newtypes, identifiers, enums
//! - [`entities`]: exchange snapshot types and the resulting plan
//! - [`services`]: side policy and the allocation algorithm
//! - [`errors`]: domain error type

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
