use std::process::exit;

use pegmatite::{BoardBuilder, Solver};

// `.` is a hole, `,` is the goal hole, spaces are off the board.
const LAYOUT: &str = concat!(
    "     . \n",
    "    ...\n",
    "...... \n",
    "....,  \n",
    "...... \n",
    "    ...\n",
    "     . ",
);

fn main() {
    let board = match BoardBuilder::from_layout(LAYOUT).build() {
        Ok(board) => board,
        Err(e) => {
            eprintln!("bad layout: {e}");
            exit(1);
        }
    };

    let mut solver = Solver::new(&board);

    // Try each starting hole in ascending index order and print the full
    // winning sequence for the first one that admits a solution.
    for start in 0..board.num_cells() {
        let mask = board.starting_mask(start);
        if !solver.solve(mask).is_solvable() {
            continue;
        }

        println!("{}", board.render(mask));
        for step in solver.replay(mask) {
            println!("{}", board.render(step));
        }
        return;
    }

    // No starting hole is solvable; nothing to print.
}
