//! Core rover types.
//!
//! This module contains the pure value types the simulator works on:
//! - `Heading` and `Command`, closed enums with single-character symbols
//! - `RoverState`, the immutable position and heading
//! - `Trace`, the immutable record of every step of a run
//!
//! Nothing in this module performs I/O or mutates a value in place.

#[macro_use]
mod macros;

mod command;
mod heading;
mod state;
mod trace;

pub use command::Command;
pub use heading::Heading;
pub use state::RoverState;
pub use trace::{StepRecord, Trace};

use thiserror::Error;

/// A character or string that does not name a variant of a symbol enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} symbol: {input:?}")]
pub struct ParseSymbolError {
    /// Name of the enum that rejected the input
    pub kind: &'static str,
    /// The rejected input, verbatim
    pub input: String,
}
