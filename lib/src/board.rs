use ndarray::Array2;

use crate::cell::LayoutCell;
use crate::direction::Direction;
use crate::mask::Mask;

/// An immutable board topology: the layout grid, the dense cell numbering,
/// and the per-cell adjacency in each of the eight directions.
///
/// [`Board`]s should be built using a [`BoardBuilder`](crate::builder::BoardBuilder);
/// once built, a board is only ever queried.
pub struct Board {
    pub(crate) grid: Array2<LayoutCell>,
    // adjacency[cell][direction as usize]
    pub(crate) adjacency: Vec<[Option<usize>; 8]>,
    pub(crate) goal: usize,
}

impl Board {
    /// The number of playable holes, i.e. the width N of the mask encoding.
    pub fn num_cells(&self) -> usize {
        self.adjacency.len()
    }

    /// The dense index of the goal hole.
    pub fn goal(&self) -> usize {
        self.goal
    }

    /// The playable neighbor of `cell` one step in `direction`, if any.
    pub fn neighbor(&self, cell: usize, direction: Direction) -> Option<usize> {
        self.adjacency[cell][direction as usize]
    }

    /// The move-transition function: the peg at `peg` jumps over its neighbor
    /// in `direction` and lands two steps away.
    ///
    /// Returns `None` unless all legality conditions hold: `peg` holds a peg,
    /// the middle neighbor exists and holds a peg, and the landing neighbor
    /// exists and is empty. Otherwise returns the configuration with `peg`
    /// and the middle peg removed and the landing cell occupied. This is the
    /// sole mutator of board-state semantics.
    pub fn next(&self, mask: Mask, peg: usize, direction: Direction) -> Option<Mask> {
        if !mask.contains(peg) {
            return None;
        }
        let over = self.neighbor(peg, direction)?;
        if !mask.contains(over) {
            return None;
        }
        let landing = self.neighbor(over, direction)?;
        if mask.contains(landing) {
            return None;
        }
        Some(mask.without(peg).without(over).with(landing))
    }

    /// The terminal configuration: a single peg at the goal hole.
    ///
    /// Only this exact configuration counts as solved; one peg left anywhere
    /// else does not.
    pub fn goal_mask(&self) -> Mask {
        Mask::single(self.goal)
    }

    /// The starting configuration with every hole occupied except `hole`.
    pub fn starting_mask(&self, hole: usize) -> Mask {
        Mask::full(self.num_cells()).without(hole)
    }

    /// Render `mask` as an ASCII diagram of the layout: occupied holes as
    /// `o`, empty holes as their original layout symbol, voids as spaces.
    pub fn render(&self, mask: Mask) -> String {
        let mut out = String::with_capacity(self.grid.nrows() * (self.grid.ncols() + 1));

        for row in self.grid.rows() {
            for cell in row {
                out.push(match cell {
                    LayoutCell::Hole { index, .. } if mask.contains(*index) => 'o',
                    LayoutCell::Hole { goal: true, .. } => ',',
                    LayoutCell::Hole { .. } => '.',
                    LayoutCell::Void => ' ',
                });
            }
            out.push('\n');
        }

        out
    }
}
