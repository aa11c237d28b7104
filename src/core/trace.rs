//! Step-by-step history of a rover run.
//!
//! A `Trace` is immutable in the functional sense: `record` consumes the
//! trace and hands back a longer one, so no caller ever observes a trace
//! changing underneath it.

use super::command::Command;
use super::state::RoverState;
use serde::{Deserialize, Serialize};

/// Record of a single applied command.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StepRecord {
    /// The state before the command
    pub from: RoverState,
    /// The command applied
    pub command: Command,
    /// The state after the command
    pub to: RoverState,
}

/// Ordered history of the steps taken from a starting state.
///
/// # Example
///
/// ```rust
/// use mars_rover::core::{Command, Heading, RoverState, Trace};
///
/// let trace = Trace::new(RoverState::new(0, 0, Heading::North))
///     .record(Command::Forward)
///     .record(Command::TurnRight)
///     .record(Command::Forward);
///
/// assert_eq!(trace.len(), 3);
/// assert_eq!(trace.current(), RoverState::new(1, 1, Heading::East));
///
/// let path = trace.get_path();
/// assert_eq!(path.len(), 4); // start + one state per step
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Trace {
    start: RoverState,
    steps: Vec<StepRecord>,
}

impl Trace {
    /// Create an empty trace positioned at `start`.
    pub fn new(start: RoverState) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Apply `command` to the current state and append the step.
    pub fn record(mut self, command: Command) -> Self {
        let from = self.current();
        let to = from.apply(command);
        self.steps.push(StepRecord { from, command, to });
        self
    }

    /// The state the trace started from.
    pub fn start(&self) -> RoverState {
        self.start
    }

    /// The latest state, or the start when no step has been recorded.
    pub fn current(&self) -> RoverState {
        self.steps.last().map_or(self.start, |step| step.to)
    }

    /// All recorded steps in order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no command has been applied.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The states visited: the start, then the result of every step.
    pub fn get_path(&self) -> Vec<&RoverState> {
        std::iter::once(&self.start)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }
}
