//! Shared infrastructure: error types, measurement units, and XML helpers.

pub mod error;
pub mod unit;
pub mod xml;

pub use error::{Error, Result};
