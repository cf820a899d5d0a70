use strum::VariantArray;

use crate::location::Location;

/// One of the eight directions a peg may jump in.
///
/// The declaration order (N, S, W, E, NW, NE, SW, SE) is the order the solver
/// tries moves in, which in turn decides which of possibly many solutions it
/// records. Do not reorder.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// Attempt the step from `location` in the direction specified by `self`
    /// and return the resultant [`Location`].
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::North => location.offset_by((0, -1)),
            Self::South => location.offset_by((0, 1)),
            Self::West => location.offset_by((-1, 0)),
            Self::East => location.offset_by((1, 0)),
            Self::NorthWest => location.offset_by((-1, -1)),
            Self::NorthEast => location.offset_by((1, -1)),
            Self::SouthWest => location.offset_by((-1, 1)),
            Self::SouthEast => location.offset_by((1, 1)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
            Self::NorthWest => Self::SouthEast,
            Self::NorthEast => Self::SouthWest,
            Self::SouthWest => Self::NorthEast,
            Self::SouthEast => Self::NorthWest,
        }
    }
}
