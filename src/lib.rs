//! Mars Rover: a pure functional rover simulator
//!
//! A rover sits on the integer plane facing one of four compass headings.
//! It accepts an instruction string of single-character commands and
//! reports where it ends up. Every operation is a pure function over
//! immutable values; construction from raw input is the only thing that
//! can fail.
//!
//! # Core Concepts
//!
//! - **Heading**: `N`, `E`, `S`, `W`, turning along a 4-cycle
//! - **Command**: `F`, `B`, `L`, `R`; every other character is ignored
//! - **RoverState**: integer position plus heading
//! - **Trace**: immutable record of every step of a run
//!
//! # Example
//!
//! ```rust
//! use mars_rover::core::{Heading, RoverState};
//! use mars_rover::simulator::{initialize, run};
//!
//! let start = initialize(100.0, 100.0, "N").unwrap();
//!
//! // A clockwise square ends where it began
//! assert_eq!(run(start, "FRFRFRFR"), start);
//!
//! // Noise in the instruction string is dropped
//! assert_eq!(
//!     run(RoverState::new(0, 0, Heading::North), "FXFXRXBfffXL1L"),
//!     RoverState::new(-1, 2, Heading::West),
//! );
//! ```

pub mod core;
pub mod simulator;

// Re-export commonly used types
pub use core::{Command, Heading, RoverState, Trace};
pub use simulator::{initialize, parse, run, run_traced, step, InitError};
