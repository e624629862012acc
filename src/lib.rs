//! Core rules for the two-player board game 'Connect 4'
//!
//! Pieces are dropped into the columns of a fixed grid and fall to the
//! lowest free row. A [`GameSession`](session::GameSession) owns the board,
//! the turn order and the running score across rounds; every move returns a
//! typed [`MoveOutcome`](session::MoveOutcome) that a front end can render.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_core::{Column, GameSession, MoveOutcome, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut session = GameSession::new();
//! for &column in [0, 1, 0, 1, 0, 1].iter() {
//!     session.submit_move(Column::new(column)?)?;
//! }
//!
//! let outcome = session.submit_move(Column::new(0)?)?;
//! assert_eq!(outcome, MoveOutcome::Won(Player::One));
//! assert_eq!(session.score().get(Player::One), 1);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win;

pub mod session;

pub mod config;

pub mod error;


pub use board::{Board, Cell, Column, Player};
pub use config::{RoundOpener, SessionConfig};
pub use error::{ConfigError, GameError};
pub use session::{GameSession, MoveOutcome, Placement, Score, SessionState};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned pieces needed to win a round
pub const WIN_LENGTH: usize = 4;

// a winning run must fit on the board in every direction
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
