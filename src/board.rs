use std::convert::TryFrom;
use std::fmt;

use crate::error::GameError;
use crate::{HEIGHT, WIDTH};

/// One of the two players, identified as 1 or 2.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The numeric identifier of the player (1 or 2)
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(format!("player must be 1 or 2, got {}", other)),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

/// A column index checked against the board width.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Column(usize);

impl Column {
    pub fn new(index: usize) -> Result<Self, GameError> {
        if index < WIDTH {
            Ok(Self(index))
        } else {
            Err(GameError::InvalidColumn { column: index })
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Every column, left to right
    pub fn all() -> impl Iterator<Item = Column> {
        (0..WIDTH).map(Column)
    }
}

impl TryFrom<usize> for Column {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Column::new(index)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The playing grid. Row 0 is the top row, row `HEIGHT - 1` rests on the floor.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; WIDTH]; HEIGHT];
    }

    /// The row a piece dropped into `column` would come to rest in,
    /// or `None` if the column is full.
    pub fn landing_row(&self, column: Column) -> Option<usize> {
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column.index()].is_empty())
    }

    /// Marks a cell for `player`.
    ///
    /// `row` must come from [`Board::landing_row`] for the same column on
    /// the current board, otherwise the gravity rule is not upheld.
    pub fn occupy(&mut self, row: usize, column: Column, player: Player) {
        debug_assert!(self.cells[row][column.index()].is_empty());
        self.cells[row][column.index()] = player.to_cell();
    }

    /// Panics if `row >= HEIGHT`.
    pub fn cell_owner(&self, row: usize, column: Column) -> Cell {
        self.cells[row][column.index()]
    }

    /// Bounds-tolerant lookup: anything off the board has no owner.
    pub fn owner_at(&self, row: isize, column: isize) -> Option<Player> {
        if row < 0 || row >= HEIGHT as isize || column < 0 || column >= WIDTH as isize {
            return None;
        }
        self.cells[row as usize][column as usize].owner()
    }

    pub fn column_height(&self, column: Column) -> usize {
        match self.landing_row(column) {
            Some(row) => HEIGHT - 1 - row,
            None => HEIGHT,
        }
    }

    pub fn piece_count(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|cell| !cell.is_empty()).count())
            .sum()
    }

    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.piece_count() == 0
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WIDTH]> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(index: usize) -> Column {
        Column::new(index).unwrap()
    }

    fn drop_piece(board: &mut Board, column: Column, player: Player) -> Option<usize> {
        let row = board.landing_row(column)?;
        board.occupy(row, column, player);
        Some(row)
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        for row in 0..HEIGHT {
            for column in Column::all() {
                assert_eq!(board.cell_owner(row, column), Cell::Empty);
            }
        }
    }

    #[test]
    fn pieces_stack_from_the_bottom() {
        let mut board = Board::new();
        for n in 0..HEIGHT {
            let player = if n % 2 == 0 { Player::One } else { Player::Two };
            assert_eq!(drop_piece(&mut board, col(3), player), Some(HEIGHT - 1 - n));
            assert_eq!(board.column_height(col(3)), n + 1);
        }
        assert_eq!(board.landing_row(col(3)), None);
        assert_eq!(board.cell_owner(HEIGHT - 1, col(3)), Cell::PlayerOne);
        assert_eq!(board.cell_owner(HEIGHT - 2, col(3)), Cell::PlayerTwo);
    }

    #[test]
    fn column_out_of_range_is_rejected() {
        assert_eq!(
            Column::new(WIDTH),
            Err(GameError::InvalidColumn { column: WIDTH })
        );
        assert!(Column::new(WIDTH - 1).is_ok());
    }

    #[test]
    fn owner_at_tolerates_out_of_range() {
        let mut board = Board::new();
        drop_piece(&mut board, col(0), Player::Two);
        assert_eq!(board.owner_at(HEIGHT as isize - 1, 0), Some(Player::Two));
        assert_eq!(board.owner_at(-1, 0), None);
        assert_eq!(board.owner_at(0, -1), None);
        assert_eq!(board.owner_at(HEIGHT as isize, 0), None);
        assert_eq!(board.owner_at(0, WIDTH as isize), None);
    }

    #[test]
    fn reset_clears_every_cell() {
        let mut board = Board::new();
        for column in Column::all() {
            while drop_piece(&mut board, column, Player::One).is_some() {}
        }
        assert!(board.is_full());
        assert_eq!(board.piece_count(), WIDTH * HEIGHT);

        board.reset();
        assert!(board.is_empty());
        assert!(!board.is_full());
    }

    #[test]
    fn player_ids() {
        assert_eq!(Player::One.id(), 1);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::try_from(2u8), Ok(Player::Two));
        assert!(Player::try_from(3u8).is_err());
        assert_eq!(Player::One.to_string(), "Player 1");
    }
}
