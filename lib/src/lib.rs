#![warn(missing_docs)]

//! Exhaustive solver for peg-elimination puzzles ("peg solitaire" variants)
//! on arbitrary hole layouts.
//!
//! A [`Board`] is parsed from a textual layout by a [`BoardBuilder`], board
//! configurations are encoded as bitmask [`Mask`]s, and a [`Solver`] decides
//! solvability of each configuration exactly once via a fully memoized
//! depth-first search, recording a witness move per solvable configuration so
//! the winning sequence can be replayed without re-searching.

pub use board::Board;
pub use builder::{BoardBuilder, LayoutError};
pub use direction::Direction;
pub use location::Location;
pub use mask::Mask;
pub use solver::{Move, Replay, Solver, Verdict};

pub(crate) mod board;
pub(crate) mod builder;
pub(crate) mod cell;
pub(crate) mod direction;
pub(crate) mod location;
pub(crate) mod mask;
pub(crate) mod solver;
mod tests;
