//! Errors raised while constructing a rover state from raw input.

use thiserror::Error;

/// Errors that can occur when initializing a rover.
///
/// Only construction can fail. Parsing and running instructions are total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InitError {
    /// A coordinate is fractional, non-finite, or too large for `i64`
    #[error("Invalid coordinates: x:{x}, y:{y} should be integers within the i64 range")]
    NonIntegerCoordinate { x: f64, y: f64 },

    /// The heading is not exactly one of `N`, `E`, `S`, `W`
    #[error("Invalid heading: {0}")]
    InvalidHeading(String),
}
