//! Rover simulator operations.
//!
//! The simulator turns raw input into typed values and folds commands over
//! a state:
//! - `initialize` validates raw coordinates and a heading symbol
//! - `parse` filters an instruction string down to recognized commands
//! - `step` applies one command
//! - `run` and `run_traced` fold a whole instruction string
//!
//! Only `initialize` can fail. Unrecognized instruction characters are
//! dropped, never reported.

pub mod error;

pub use error::InitError;

use crate::core::{Command, Heading, RoverState, Trace};
use tracing::{debug, trace};

/// Smallest `f64` that is out of range for `i64` on the positive side (2^63).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Build a rover state from raw coordinates and a heading symbol.
///
/// Coordinates must be finite whole numbers within the `i64` range; a
/// whole number outside that range is rejected like a fractional one. The
/// heading must be exactly one of `N`, `E`, `S`, `W`. Coordinates are
/// checked before the heading.
///
/// # Example
///
/// ```rust
/// use mars_rover::core::{Heading, RoverState};
/// use mars_rover::simulator::{initialize, InitError};
///
/// let state = initialize(3.0, -7.0, "E").unwrap();
/// assert_eq!(state, RoverState::new(3, -7, Heading::East));
///
/// assert!(matches!(
///     initialize(0.5, 0.0, "N"),
///     Err(InitError::NonIntegerCoordinate { .. })
/// ));
/// assert!(matches!(
///     initialize(0.0, 0.0, "north"),
///     Err(InitError::InvalidHeading(_))
/// ));
/// ```
pub fn initialize(x: f64, y: f64, heading: &str) -> Result<RoverState, InitError> {
    let (Some(xi), Some(yi)) = (whole(x), whole(y)) else {
        debug!(x, y, "rejected non-integer rover coordinates");
        return Err(InitError::NonIntegerCoordinate { x, y });
    };

    let heading = heading.parse::<Heading>().map_err(|err| {
        debug!(heading = %err.input, "rejected rover heading");
        InitError::InvalidHeading(err.input)
    })?;

    Ok(RoverState::new(xi, yi, heading))
}

/// Filter an instruction string down to its recognized commands.
///
/// Characters are examined in order; anything other than `F`, `B`, `L`, `R`
/// is silently dropped, including lowercase letters.
///
/// # Example
///
/// ```rust
/// use mars_rover::core::Command;
/// use mars_rover::simulator::parse;
///
/// assert_eq!(parse("FXB"), vec![Command::Forward, Command::Backward]);
/// assert!(parse("").is_empty());
/// ```
pub fn parse(raw: &str) -> Vec<Command> {
    raw.chars().filter_map(Command::from_symbol).collect()
}

/// Apply exactly one command to `state`.
pub fn step(state: RoverState, command: Command) -> RoverState {
    let next = state.apply(command);
    trace!(%command, from = %state, to = %next, "rover step");
    next
}

/// Parse `raw` and fold every recognized command over `initial`.
///
/// An instruction string with no recognized commands returns `initial`
/// unchanged.
///
/// # Example
///
/// ```rust
/// use mars_rover::core::{Heading, RoverState};
/// use mars_rover::simulator::run;
///
/// let start = RoverState::new(0, 0, Heading::North);
/// assert_eq!(run(start, "FFRBLL"), RoverState::new(-1, 2, Heading::West));
/// ```
pub fn run(initial: RoverState, raw: &str) -> RoverState {
    let commands = parse(raw);
    let last = commands.iter().copied().fold(initial, step);
    debug!(commands = commands.len(), start = %initial, end = %last, "rover run complete");
    last
}

/// Like [`run`], but keep every intermediate step.
///
/// # Example
///
/// ```rust
/// use mars_rover::core::{Heading, RoverState};
/// use mars_rover::simulator::{run, run_traced};
///
/// let start = RoverState::new(0, 0, Heading::North);
/// let trace = run_traced(start, "F x R F");
///
/// assert_eq!(trace.len(), 3);
/// assert_eq!(trace.current(), run(start, "F x R F"));
/// ```
pub fn run_traced(initial: RoverState, raw: &str) -> Trace {
    let trace = parse(raw)
        .into_iter()
        .fold(Trace::new(initial), |trace, command| trace.record(command));
    debug!(
        commands = trace.len(),
        start = %initial,
        end = %trace.current(),
        "rover traced run complete"
    );
    trace
}

fn whole(value: f64) -> Option<i64> {
    let in_range = (-I64_UPPER_BOUND..I64_UPPER_BOUND).contains(&value);
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}
