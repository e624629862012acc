//! Four-in-a-row detection.
//!
//! A run is `WIN_LENGTH` consecutive cells starting at some cell and
//! stepping in one of four directions. A run wins for a player if every cell
//! is on the board and owned by that player.

use crate::board::{Board, Player};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Step between consecutive cells of a run as `(dy, dx)`, rows growing downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

fn run_wins(board: &Board, row: isize, column: isize, direction: Direction, player: Player) -> bool {
    let (dy, dx) = direction.delta();
    (0..WIN_LENGTH as isize).all(|i| board.owner_at(row + dy * i, column + dx * i) == Some(player))
}

/// Scans every run on the board and returns the cells of the first one
/// fully owned by `player`.
pub fn winning_run(board: &Board, player: Player) -> Option<[(usize, usize); WIN_LENGTH]> {
    for row in 0..HEIGHT as isize {
        for column in 0..WIDTH as isize {
            for &direction in Direction::ALL.iter() {
                if run_wins(board, row, column, direction, player) {
                    let (dy, dx) = direction.delta();
                    let mut cells = [(0, 0); WIN_LENGTH];
                    for (i, cell) in cells.iter_mut().enumerate() {
                        let i = i as isize;
                        *cell = ((row + dy * i) as usize, (column + dx * i) as usize);
                    }
                    return Some(cells);
                }
            }
        }
    }
    None
}

/// Whether `player` owns any complete run anywhere on the board.
pub fn check(board: &Board, player: Player) -> bool {
    winning_run(board, player).is_some()
}

/// Whether `player` owns a complete run passing through `(row, column)`.
///
/// Only the runs containing that cell are inspected, so after a move this
/// gives the same answer as [`check`] provided the board had no win before.
pub fn check_through(board: &Board, row: usize, column: usize, player: Player) -> bool {
    let (row, column) = (row as isize, column as isize);
    Direction::ALL.iter().any(|&direction| {
        let (dy, dx) = direction.delta();
        // every run start that puts (row, column) at offset `back` within the run
        (0..WIN_LENGTH as isize).any(|back| {
            run_wins(board, row - dy * back, column - dx * back, direction, player)
        })
    })
}
