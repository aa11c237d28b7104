//! Rover position and heading.
//!
//! `RoverState` is an immutable value: every method returns a new state
//! and leaves the receiver untouched.

use super::command::Command;
use super::heading::Heading;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rover's complete status: integer position plus heading.
///
/// The world is the full integer plane. There are no grid limits and no
/// obstacles; translations at the very edge of the `i64` range wrap.
///
/// # Example
///
/// ```rust
/// use mars_rover::core::{Command, Heading, RoverState};
///
/// let start = RoverState::new(0, 0, Heading::North);
/// let moved = start.apply(Command::Forward).apply(Command::TurnRight);
///
/// assert_eq!(moved, RoverState::new(0, 1, Heading::East));
/// assert_eq!(start, RoverState::new(0, 0, Heading::North)); // Original unchanged
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct RoverState {
    /// Position along the east-west axis
    pub x: i64,
    /// Position along the north-south axis
    pub y: i64,
    /// Direction the rover faces
    #[serde(rename = "direction")]
    pub heading: Heading,
}

impl RoverState {
    /// Create a state from already-typed coordinates and heading.
    ///
    /// For untrusted input use [`crate::simulator::initialize`], which
    /// validates raw numbers and heading symbols.
    pub const fn new(x: i64, y: i64, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Move one unit along the current heading.
    pub fn move_forward(self) -> Self {
        let (dx, dy) = self.heading.delta();
        self.translate(dx, dy)
    }

    /// Move one unit against the current heading.
    ///
    /// Exactly undoes `move_forward` for the same heading.
    pub fn move_backward(self) -> Self {
        let (dx, dy) = self.heading.delta();
        self.translate(dx.wrapping_neg(), dy.wrapping_neg())
    }

    /// Rotate 90° counter-clockwise without moving.
    pub fn turn_left(self) -> Self {
        Self {
            heading: self.heading.turn_left(),
            ..self
        }
    }

    /// Rotate 90° clockwise without moving.
    pub fn turn_right(self) -> Self {
        Self {
            heading: self.heading.turn_right(),
            ..self
        }
    }

    /// Apply a single command, returning the resulting state.
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::Forward => self.move_forward(),
            Command::Backward => self.move_backward(),
            Command::TurnLeft => self.turn_left(),
            Command::TurnRight => self.turn_right(),
        }
    }

    fn translate(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            ..self
        }
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.x, self.y, self.heading)
    }
}
