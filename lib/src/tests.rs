#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use crate::{Board, BoardBuilder, Direction, LayoutError, Mask, Solver, Verdict};

    // The fixed board the driver ships: 25 holes, goal in the interior.
    const CLASSIC: &str = concat!(
        "     . \n",
        "    ...\n",
        "...... \n",
        "....,  \n",
        "...... \n",
        "    ...\n",
        "     . ",
    );

    fn classic_board() -> Board {
        BoardBuilder::from_layout(CLASSIC).build().unwrap()
    }

    #[test]
    fn classic_layout_numbering() {
        let board = classic_board();
        assert_eq!(board.num_cells(), 25);
        // row-major scan: rows hold 1, 3, 6, 5, 6, 3, 1 holes; the goal is
        // the fifth hole of the fourth row
        assert_eq!(board.goal(), 14);
    }

    #[test]
    fn classic_adjacency() {
        let board = classic_board();
        // topmost hole: nothing above it, three holes below
        assert_eq!(board.neighbor(0, Direction::North), None);
        assert_eq!(board.neighbor(0, Direction::West), None);
        assert_eq!(board.neighbor(0, Direction::SouthWest), Some(1));
        assert_eq!(board.neighbor(0, Direction::South), Some(2));
        assert_eq!(board.neighbor(0, Direction::SouthEast), Some(3));
        // the goal hole sits against the void on its east side
        assert_eq!(board.neighbor(14, Direction::East), None);
        assert_eq!(board.neighbor(14, Direction::West), Some(13));
        assert_eq!(board.neighbor(14, Direction::North), Some(8));
        assert_eq!(board.neighbor(14, Direction::South), Some(19));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let board = classic_board();
        for cell in 0..board.num_cells() {
            for &direction in Direction::VARIANTS {
                if let Some(neighbor) = board.neighbor(cell, direction) {
                    assert_eq!(
                        board.neighbor(neighbor, direction.invert()),
                        Some(cell),
                        "cell {cell} -> {direction:?} -> {neighbor} has no reverse edge"
                    );
                }
            }
        }
    }

    #[test]
    fn direction_order_is_fixed() {
        // the solver's move enumeration order; reordering changes which
        // solution gets recorded
        assert_eq!(
            Direction::VARIANTS,
            &[
                Direction::North,
                Direction::South,
                Direction::West,
                Direction::East,
                Direction::NorthWest,
                Direction::NorthEast,
                Direction::SouthWest,
                Direction::SouthEast,
            ]
        );
    }

    #[test]
    fn jump_legality() {
        // three holes in a row, goal at the east end
        let board = BoardBuilder::from_layout("..,").build().unwrap();
        let both = board.starting_mask(2);

        // the one legal jump: peg 0 over peg 1 into the empty goal
        let landed = board.next(both, 0, Direction::East).unwrap();
        assert_eq!(landed, board.goal_mask());
        assert_eq!(landed.count(), both.count() - 1);
        assert!(!landed.contains(0));
        assert!(!landed.contains(1));
        assert!(landed.contains(2));

        // origin empty
        assert_eq!(board.next(both, 2, Direction::West), None);
        // middle neighbor empty
        assert_eq!(board.next(Mask::single(0).with(2), 0, Direction::East), None);
        // no landing neighbor beyond the row
        assert_eq!(board.next(Mask::single(1).with(2), 1, Direction::East), None);
        // landing occupied
        assert_eq!(board.next(Mask::full(3), 0, Direction::East), None);
        // no middle neighbor off the west edge
        assert_eq!(board.next(both, 0, Direction::West), None);
    }

    #[test]
    fn solve_trivial_row() {
        let board = BoardBuilder::from_layout("..,").build().unwrap();
        let mut solver = Solver::new(&board);
        let start = board.starting_mask(2);

        let verdict = solver.solve(start);
        assert_eq!(
            verdict,
            Verdict::Step(crate::Move { peg: 0, direction: Direction::East })
        );

        let path: Vec<_> = solver.replay(start).collect();
        assert_eq!(path, vec![board.goal_mask()]);
    }

    #[test]
    fn goal_configuration_is_solved() {
        let board = BoardBuilder::from_layout("..,").build().unwrap();
        let mut solver = Solver::new(&board);
        assert_eq!(solver.solve(board.goal_mask()), Verdict::Solved);
        // a single peg anywhere else is not a win
        assert_eq!(solver.solve(Mask::single(0)), Verdict::Unsolvable);
    }

    #[test]
    fn isolated_pegs_are_unsolvable() {
        // two holes separated by a void; no jump can ever connect them
        let board = BoardBuilder::from_layout(", .").build().unwrap();
        let mut solver = Solver::new(&board);
        let stuck = Mask::single(0).with(1);

        assert_eq!(solver.solve(stuck), Verdict::Unsolvable);
        // the memoized verdict is permanent
        assert_eq!(solver.solve(stuck), Verdict::Unsolvable);
    }

    #[test]
    fn memoization_is_idempotent() {
        let board = classic_board();
        let mut solver = Solver::new(&board);
        let start = board.starting_mask(board.goal());

        let first = solver.solve(start);
        let second = solver.solve(start);
        assert_eq!(first, second);
    }

    #[test]
    fn classic_board_solvable_from_goal_hole() {
        let board = classic_board();
        let mut solver = Solver::new(&board);
        let start = board.starting_mask(board.goal());

        assert!(solver.solve(start).is_solvable());

        // every replayed state drops exactly one peg, and the walk ends at
        // the exact goal configuration after popcount - 1 moves
        let mut previous = start;
        let mut moves = 0u32;
        for mask in solver.replay(start) {
            assert_eq!(mask.count(), previous.count() - 1);
            previous = mask;
            moves += 1;
        }
        assert_eq!(previous, board.goal_mask());
        assert_eq!(moves, start.count() - 1);
    }

    #[test]
    fn render_classic_start() {
        let board = classic_board();
        let start = board.starting_mask(board.goal());
        assert_eq!(
            board.render(start),
            concat!(
                "     o \n",
                "    ooo\n",
                "oooooo \n",
                "oooo,  \n",
                "oooooo \n",
                "    ooo\n",
                "     o \n",
            )
        );
    }

    #[test]
    fn layout_errors() {
        assert_eq!(
            BoardBuilder::from_layout("...").build().err(),
            Some(LayoutError::NoGoal)
        );
        assert_eq!(
            BoardBuilder::from_layout(",.,").build().err(),
            Some(LayoutError::MultipleGoals { count: 2 })
        );
        assert_eq!(
            BoardBuilder::from_layout("   ").build().err(),
            Some(LayoutError::NoHoles)
        );

        let too_wide = format!("{},", ".".repeat(31));
        assert_eq!(
            BoardBuilder::from_layout(&too_wide).build().err(),
            Some(LayoutError::TooManyHoles { count: 32 })
        );
    }
}
