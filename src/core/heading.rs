//! Compass heading and its rotation algebra.

symbol_enum! {
    /// The compass direction the rover faces.
    ///
    /// Turning follows the cycle North → East → South → West → North.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mars_rover::core::Heading;
    ///
    /// assert_eq!(Heading::North.turn_right(), Heading::East);
    /// assert_eq!(Heading::North.turn_left(), Heading::West);
    /// assert_eq!("S".parse::<Heading>(), Ok(Heading::South));
    /// ```
    pub enum Heading {
        North = 'N',
        East = 'E',
        South = 'S',
        West = 'W',
    }
}

impl Heading {
    /// Rotate 90° clockwise.
    pub const fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Rotate 90° counter-clockwise.
    pub const fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Unit displacement `(dx, dy)` of one forward move.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}
