//! Rover commands.

symbol_enum! {
    /// A single recognized instruction.
    ///
    /// Each command is written as one uppercase character in an instruction
    /// string. Lowercase letters are not commands.
    pub enum Command {
        /// Move one unit along the current heading
        Forward = 'F',
        /// Move one unit against the current heading
        Backward = 'B',
        /// Rotate 90° counter-clockwise in place
        TurnLeft = 'L',
        /// Rotate 90° clockwise in place
        TurnRight = 'R',
    }
}

impl Command {
    /// True for `Forward` and `Backward`.
    pub const fn is_move(self) -> bool {
        matches!(self, Self::Forward | Self::Backward)
    }

    /// True for `TurnLeft` and `TurnRight`.
    pub const fn is_turn(self) -> bool {
        !self.is_move()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_instruction_alphabet() {
        let symbols: String = Command::ALL.iter().map(|c| c.symbol()).collect();
        assert_eq!(symbols, "FBLR");
    }

    #[test]
    fn lowercase_is_not_a_command() {
        for symbol in ['f', 'b', 'l', 'r'] {
            assert_eq!(Command::from_symbol(symbol), None);
        }
    }

    #[test]
    fn moves_and_turns_partition_commands() {
        assert!(Command::Forward.is_move());
        assert!(Command::Backward.is_move());
        assert!(Command::TurnLeft.is_turn());
        assert!(Command::TurnRight.is_turn());
        for command in Command::ALL {
            assert_ne!(command.is_move(), command.is_turn());
        }
    }

    #[test]
    fn command_serializes_as_symbol() {
        let json = serde_json::to_string(&vec![Command::Forward, Command::TurnLeft]).unwrap();
        assert_eq!(json, r#"["F","L"]"#);
    }
}
