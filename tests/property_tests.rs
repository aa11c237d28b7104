//! Property-based tests for the rover simulator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated states and instruction strings.

use mars_rover::core::{Command, Heading, RoverState};
use mars_rover::simulator::{initialize, parse, run, run_traced, step, InitError};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_heading()(index in 0..4usize) -> Heading {
        Heading::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_command()(index in 0..4usize) -> Command {
        Command::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_state()(x in any::<i64>(), y in any::<i64>(), heading in arbitrary_heading()) -> RoverState {
        RoverState::new(x, y, heading)
    }
}

prop_compose! {
    fn clean_instructions()(commands in prop::collection::vec(arbitrary_command(), 0..100)) -> String {
        commands.into_iter().map(char::from).collect()
    }
}

prop_compose! {
    /// Every command is preceded by a random character, which may or may not
    /// itself be a command.
    fn dirty_instructions()(
        pairs in prop::collection::vec((any::<char>(), arbitrary_command()), 0..100)
    ) -> String {
        pairs
            .into_iter()
            .flat_map(|(noise, command)| [noise, char::from(command)])
            .collect()
    }
}

fn non_integer() -> impl Strategy<Value = f64> {
    (-1000.0f64..1000.0).prop_filter("must have a fractional part", |v| v.fract() != 0.0)
}

proptest! {
    #[test]
    fn initialize_returns_inputs_unchanged(
        x in -1000i64..1000,
        y in -1000i64..1000,
        heading in arbitrary_heading()
    ) {
        let state = initialize(x as f64, y as f64, &heading.to_string());
        prop_assert_eq!(state, Ok(RoverState::new(x, y, heading)));
    }

    #[test]
    fn initialize_rejects_non_integer_x(x in non_integer(), y in -1000i64..1000) {
        let result = initialize(x, y as f64, "N");
        let is_coordinate_error = matches!(result, Err(InitError::NonIntegerCoordinate { .. }));
        prop_assert!(is_coordinate_error);
    }

    #[test]
    fn initialize_rejects_non_integer_y(x in -1000i64..1000, y in non_integer()) {
        let result = initialize(x as f64, y, "E");
        let is_coordinate_error = matches!(result, Err(InitError::NonIntegerCoordinate { .. }));
        prop_assert!(is_coordinate_error);
    }

    #[test]
    fn initialize_rejects_unknown_heading(heading in "[a-z0-9]{0,8}|[A-Z]{2,8}") {
        prop_assert_eq!(
            initialize(0.0, 0.0, &heading),
            Err(InitError::InvalidHeading(heading.clone()))
        );
    }

    #[test]
    fn parse_keeps_clean_instructions_whole(raw in clean_instructions()) {
        let commands = parse(&raw);
        prop_assert_eq!(commands.len(), raw.chars().count());
        let rebuilt: String = commands.into_iter().map(char::from).collect();
        prop_assert_eq!(rebuilt, raw);
    }

    #[test]
    fn parse_yields_only_commands_in_order(raw in dirty_instructions()) {
        let expected: Vec<Command> = raw
            .chars()
            .filter(|c| matches!(c, 'F' | 'B' | 'L' | 'R'))
            .map(|c| Command::from_symbol(c).unwrap())
            .collect();
        prop_assert_eq!(parse(&raw), expected);
    }

    #[test]
    fn four_right_turns_are_identity(state in arbitrary_state()) {
        let turned = (0..4).fold(state, |s, _| step(s, Command::TurnRight));
        prop_assert_eq!(turned, state);
    }

    #[test]
    fn four_left_turns_are_identity(state in arbitrary_state()) {
        let turned = (0..4).fold(state, |s, _| step(s, Command::TurnLeft));
        prop_assert_eq!(turned, state);
    }

    #[test]
    fn backward_undoes_forward(state in arbitrary_state()) {
        prop_assert_eq!(step(step(state, Command::Forward), Command::Backward), state);
        prop_assert_eq!(step(step(state, Command::Backward), Command::Forward), state);
    }

    #[test]
    fn turns_never_move(state in arbitrary_state(), command in arbitrary_command()) {
        let next = step(state, command);
        if command.is_turn() {
            prop_assert_eq!((next.x, next.y), (state.x, state.y));
        } else {
            prop_assert_eq!(next.heading, state.heading);
        }
    }

    #[test]
    fn run_ignores_noise(state in arbitrary_state(), raw in dirty_instructions()) {
        let filtered: String = parse(&raw).into_iter().map(char::from).collect();
        prop_assert_eq!(run(state, &raw), run(state, &filtered));
    }

    #[test]
    fn run_equals_stepwise_fold(state in arbitrary_state(), raw in clean_instructions()) {
        let mut expected = state;
        for command in parse(&raw) {
            expected = step(expected, command);
        }
        prop_assert_eq!(run(state, &raw), expected);
    }

    #[test]
    fn run_is_compositional(
        state in arbitrary_state(),
        first in dirty_instructions(),
        second in dirty_instructions()
    ) {
        let joined = format!("{first}{second}");
        prop_assert_eq!(run(state, &joined), run(run(state, &first), &second));
    }

    #[test]
    fn trace_agrees_with_run(state in arbitrary_state(), raw in dirty_instructions()) {
        let trace = run_traced(state, &raw);
        prop_assert_eq!(trace.current(), run(state, &raw));
        prop_assert_eq!(trace.len(), parse(&raw).len());
        prop_assert_eq!(trace.get_path().len(), trace.len() + 1);
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: RoverState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
