use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::board::Board;
use crate::cell::LayoutCell;
use crate::direction::Direction;
use crate::location::Location;

const HOLE: char = '.';
const GOAL: char = ',';

/// Reasons a textual layout cannot be built into a [`Board`].
///
/// All of these are startup-time configuration errors; none can occur once a
/// board exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LayoutError {
    /// The layout has more playable holes than the 32-bit mask encoding can
    /// hold (one bit is reserved).
    TooManyHoles {
        /// Number of holes found.
        count: usize,
    },
    /// The layout has no playable holes at all.
    NoHoles,
    /// The layout does not mark a goal hole.
    NoGoal,
    /// The layout marks more than one goal hole.
    MultipleGoals {
        /// Number of goal holes found.
        count: usize,
    },
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyHoles { count } => {
                write!(f, "layout has {count} holes; at most 31 fit the mask encoding")
            }
            Self::NoHoles => write!(f, "layout has no playable holes"),
            Self::NoGoal => write!(f, "layout does not mark a goal hole"),
            Self::MultipleGoals { count } => {
                write!(f, "layout marks {count} goal holes; exactly one is required")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Parses a textual layout into a [`Board`].
///
/// In the layout text, `.` is a playable hole, `,` is the unique goal hole,
/// and any other character (conventionally a space) is a void position.
pub struct BoardBuilder {
    rows: Vec<Vec<char>>,
}

impl BoardBuilder {
    /// Take the layout text to build from, one grid row per line.
    pub fn from_layout(layout: &str) -> Self {
        Self {
            rows: layout.lines().map(|line| line.chars().collect_vec()).collect_vec(),
        }
    }

    /// Scan the layout, number its holes, and derive the adjacency table.
    pub fn build(&self) -> Result<Board, LayoutError> {
        let height = self.rows.len();
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);

        // The row-major scan order here fixes the bit-position-to-hole
        // mapping every mask depends on.
        let mut grid = Array2::from_elem((height, width), LayoutCell::Void);
        let mut num_cells = 0usize;
        let mut goals = Vec::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &symbol) in row.iter().enumerate() {
                if symbol == HOLE || symbol == GOAL {
                    if symbol == GOAL {
                        goals.push(num_cells);
                    }
                    grid[(y, x)] = LayoutCell::Hole {
                        index: num_cells,
                        goal: symbol == GOAL,
                    };
                    num_cells += 1;
                }
            }
        }

        if num_cells == 0 {
            return Err(LayoutError::NoHoles);
        }
        if num_cells >= u32::BITS as usize {
            return Err(LayoutError::TooManyHoles { count: num_cells });
        }
        let goal = match goals.len() {
            0 => return Err(LayoutError::NoGoal),
            1 => goals[0],
            count => return Err(LayoutError::MultipleGoals { count }),
        };

        let mut adjacency = vec![[None; 8]; num_cells];
        for (ind, cell) in grid.indexed_iter() {
            if let Some(index) = cell.index() {
                for &direction in Direction::VARIANTS {
                    let probe = direction.attempt_from(Location::from(ind));
                    adjacency[index][direction as usize] =
                        grid.get(probe.as_index()).and_then(LayoutCell::index);
                }
            }
        }

        Ok(Board { grid, adjacency, goal })
    }
}
