use std::fmt::{Debug, Formatter};

/// A board configuration: bit `i` is set iff cell `i` currently holds a peg.
///
/// The encoding supports at most 31 cells; one bit of the `u32` stays
/// reserved so shifts in [`Mask::full`] cannot overflow. Layouts too large
/// for this are rejected by the builder before any mask exists.
///
/// No code outside the board's transition function flips bits of a mask that
/// represents a live configuration; everything else treats masks as opaque
/// values.
#[derive(Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Mask(u32);

impl Mask {
    /// The configuration with a single peg at `cell`.
    pub fn single(cell: usize) -> Self {
        Self(1 << cell)
    }

    /// The configuration with every one of `num_cells` cells occupied.
    pub fn full(num_cells: usize) -> Self {
        Self((1u32 << num_cells) - 1)
    }

    /// Whether `cell` holds a peg.
    pub fn contains(&self, cell: usize) -> bool {
        self.0 & (1 << cell) != 0
    }

    /// The number of pegs on the board.
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Whether no pegs remain anywhere.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// This configuration with the peg at `cell` removed.
    pub fn without(self, cell: usize) -> Self {
        Self(self.0 & !(1 << cell))
    }

    /// This configuration with a peg added at `cell`.
    pub fn with(self, cell: usize) -> Self {
        Self(self.0 | (1 << cell))
    }

    // Raw bit pattern; indexes the solver's memo table.
    pub(crate) fn bits(&self) -> u32 {
        self.0
    }
}

impl Debug for Mask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mask({:#b})", self.0)
    }
}
