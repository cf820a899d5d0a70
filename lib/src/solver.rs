use strum::VariantArray;

use crate::board::Board;
use crate::direction::Direction;
use crate::mask::Mask;

/// A single jump: the peg at cell `peg` leaps over its neighbor in
/// `direction` and lands two steps away.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Move {
    /// Dense cell index of the jumping peg.
    pub peg: u8,
    /// Direction of the jump.
    pub direction: Direction,
}

/// The solvability verdict recorded for a board configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// No move sequence from this configuration reaches the goal.
    Unsolvable,
    /// This configuration already is the goal configuration.
    Solved,
    /// Solvable: the carried [`Move`] is the first move of a recorded
    /// solution path.
    Step(Move),
}

impl Verdict {
    /// Whether a solution path exists from a configuration with this verdict.
    pub fn is_solvable(&self) -> bool {
        !matches!(self, Self::Unsolvable)
    }
}

/// Memoized exhaustive search over the configurations of one [`Board`].
///
/// The memo table holds one slot per possible mask value (`2^N` slots),
/// allocated up front and never resized or evicted. Each slot starts empty
/// and is written exactly once, after which the verdict for that mask is
/// permanent.
pub struct Solver<'a> {
    board: &'a Board,
    memo: Vec<Option<Verdict>>,
}

impl<'a> Solver<'a> {
    /// Create a solver for `board` with an entirely undecided memo table.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            memo: vec![None; 1usize << board.num_cells()],
        }
    }

    /// Decide whether `mask` can be reduced to the goal configuration,
    /// caching the verdict.
    ///
    /// Each distinct mask is evaluated at most once; later calls return the
    /// cached verdict without exploring anything. Recursion depth is bounded
    /// by the peg count of `mask`, since every move removes exactly one peg.
    ///
    /// # Panics
    ///
    /// Panics if `mask` is empty; an empty board is unreachable through legal
    /// moves, so being asked about one means the caller has a logic bug.
    pub fn solve(&mut self, mask: Mask) -> Verdict {
        if let Some(verdict) = self.memo[mask.bits() as usize] {
            return verdict;
        }
        assert!(!mask.is_empty(), "solve() called on a board with no pegs");

        let verdict = if mask == self.board.goal_mask() {
            Verdict::Solved
        } else {
            self.explore(mask)
        };
        self.memo[mask.bits() as usize] = Some(verdict);
        verdict
    }

    // Try every (peg, direction) pair in fixed order, ascending cell index
    // outer, `Direction::VARIANTS` inner, and return the first whose
    // successor is solvable. The order determines which of possibly many
    // solutions gets recorded.
    fn explore(&mut self, mask: Mask) -> Verdict {
        for peg in 0..self.board.num_cells() {
            if !mask.contains(peg) {
                continue;
            }
            for &direction in Direction::VARIANTS {
                let Some(successor) = self.board.next(mask, peg, direction) else {
                    continue;
                };
                if self.solve(successor).is_solvable() {
                    return Verdict::Step(Move {
                        peg: peg as u8,
                        direction,
                    });
                }
            }
        }

        Verdict::Unsolvable
    }

    /// Walk the recorded solution from `start`, yielding the configuration
    /// after each applied move, ending with the goal configuration.
    ///
    /// `start` should have been decided solvable by [`Solver::solve`]; for an
    /// undecided or unsolvable mask the walk yields nothing.
    pub fn replay(&self, start: Mask) -> Replay<'_> {
        Replay { solver: self, mask: start }
    }
}

/// Iterator over the successive configurations of a recorded solution path.
/// See [`Solver::replay`].
pub struct Replay<'a> {
    solver: &'a Solver<'a>,
    mask: Mask,
}

impl Iterator for Replay<'_> {
    type Item = Mask;

    fn next(&mut self) -> Option<Mask> {
        match self.solver.memo[self.mask.bits() as usize] {
            Some(Verdict::Step(mv)) => {
                self.mask = self
                    .solver
                    .board
                    .next(self.mask, mv.peg as usize, mv.direction)
                    // the move was proven legal when it was recorded
                    .expect("recorded move failed to apply");
                Some(self.mask)
            }
            _ => None,
        }
    }
}
