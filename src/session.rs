//! Round, turn and score bookkeeping around a [`Board`].

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Column, Player};
use crate::config::{RoundOpener, SessionConfig};
use crate::error::{ConfigError, GameError};
use crate::win;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SessionState {
    InProgress,
    RoundOver,
}

/// A realised move.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Placement {
    pub row: usize,
    pub column: Column,
    pub player: Player,
}

/// What happened as a result of a single move request.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MoveOutcome {
    /// The piece was placed and play continues with the other player
    Moved(Placement),
    /// The column was full; nothing changed
    Ignored,
    /// The move completed four in a row for this player
    Won(Player),
    /// The move filled the board without a win
    Tie,
}

/// Rounds won per player, plus drawn rounds.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Score {
    player_one: u32,
    player_two: u32,
    draws: u32,
}

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// The player with strictly more wins, if any
    pub fn leader(&self) -> Option<Player> {
        if self.player_one > self.player_two {
            Some(Player::One)
        } else if self.player_two > self.player_one {
            Some(Player::Two)
        } else {
            None
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::One => self.player_one += 1,
            Player::Two => self.player_two += 1,
        }
    }
}

/// A sequence of rounds between two players sharing one board.
///
/// Not meant for concurrent use: moves are applied one at a time through
/// `&mut self`.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    state: SessionState,
    score: Score,
    moves: Vec<Placement>,
    rounds_played: u32,
    round_opener: RoundOpener,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_opener(Player::One, RoundOpener::default())
    }

    pub fn with_opener(first_player: Player, round_opener: RoundOpener) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            state: SessionState::InProgress,
            score: Score::default(),
            moves: Vec::new(),
            rounds_played: 0,
            round_opener,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_opener(config.first_player()?, config.round_opener))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Placements made so far in the current round, oldest first
    pub fn moves(&self) -> &[Placement] {
        &self.moves
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Drops a piece for the current player into `column`.
    ///
    /// A full column yields [`MoveOutcome::Ignored`] and leaves the session
    /// untouched. A win or a tie clears the board immediately and moves the
    /// session to [`SessionState::RoundOver`] until [`start_new_round`] is
    /// called.
    ///
    /// [`start_new_round`]: GameSession::start_new_round
    #[instrument(skip(self), fields(player = self.current_player.id()))]
    pub fn submit_move(&mut self, column: Column) -> Result<MoveOutcome, GameError> {
        if self.state == SessionState::RoundOver {
            warn!(%column, "move rejected, round is over");
            return Err(GameError::RoundOver);
        }

        let row = match self.board.landing_row(column) {
            Some(row) => row,
            None => {
                debug!(%column, "column full, move ignored");
                return Ok(MoveOutcome::Ignored);
            }
        };

        let player = self.current_player;
        self.board.occupy(row, column, player);
        let placement = Placement {
            row,
            column,
            player,
        };
        self.moves.push(placement);
        debug!(row, %column, "piece placed");

        if win::check_through(&self.board, row, column.index(), player) {
            self.score.record_win(player);
            info!(
                %player,
                wins = self.score.get(player),
                "round won"
            );
            self.end_round();
            return Ok(MoveOutcome::Won(player));
        }

        if self.board.is_full() {
            self.score.draws += 1;
            info!("round tied");
            self.end_round();
            return Ok(MoveOutcome::Tie);
        }

        self.current_player = player.other();
        Ok(MoveOutcome::Moved(placement))
    }

    /// Validates a raw column index before submitting it.
    pub fn submit_move_index(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        let column = Column::new(column).map_err(|e| {
            warn!(column, "move rejected, column out of range");
            e
        })?;
        self.submit_move(column)
    }

    /// Begins the next round on a cleared board.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self) {
        self.board.reset();
        self.moves.clear();
        self.state = SessionState::InProgress;
        info!(
            round = self.rounds_played + 1,
            opener = %self.current_player,
            "new round"
        );
    }

    fn end_round(&mut self) {
        self.board.reset();
        self.moves.clear();
        self.rounds_played += 1;
        self.state = SessionState::RoundOver;
        if self.round_opener == RoundOpener::Alternate {
            self.current_player = self.current_player.other();
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HEIGHT, WIDTH};

    fn play(session: &mut GameSession, columns: &[usize]) -> Vec<MoveOutcome> {
        columns
            .iter()
            .map(|&column| session.submit_move_index(column).unwrap())
            .collect()
    }

    #[test]
    fn initial_state() {
        let session = GameSession::new();
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.state(), SessionState::InProgress);
        assert!(session.board().is_empty());
        assert_eq!(session.score().get(Player::One), 0);
        assert_eq!(session.score().get(Player::Two), 0);
        assert_eq!(session.rounds_played(), 0);
    }

    #[test]
    fn move_reports_placement_and_passes_turn() {
        let mut session = GameSession::new();
        let outcome = session.submit_move_index(3).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved(Placement {
                row: HEIGHT - 1,
                column: Column::new(3).unwrap(),
                player: Player::One,
            })
        );
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.moves().len(), 1);
    }

    #[test]
    fn invalid_column_is_an_error() {
        let mut session = GameSession::new();
        assert_eq!(
            session.submit_move_index(WIDTH),
            Err(GameError::InvalidColumn { column: WIDTH })
        );
        assert_eq!(session.current_player(), Player::One);
        assert!(session.board().is_empty());
    }

    #[test]
    fn full_column_is_ignored() {
        let mut session = GameSession::new();
        play(&mut session, &[2; HEIGHT]);
        let before = *session.board();
        let player = session.current_player();

        assert_eq!(session.submit_move_index(2), Ok(MoveOutcome::Ignored));
        assert_eq!(session.board(), &before);
        assert_eq!(session.current_player(), player);
        assert_eq!(session.moves().len(), HEIGHT);
    }

    #[test]
    fn moves_rejected_until_new_round() {
        let mut session = GameSession::new();
        let outcomes = play(&mut session, &[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(outcomes.last(), Some(&MoveOutcome::Won(Player::One)));
        assert_eq!(session.state(), SessionState::RoundOver);
        assert_eq!(session.submit_move_index(3), Err(GameError::RoundOver));

        session.start_new_round();
        assert_eq!(session.state(), SessionState::InProgress);
        assert!(session.submit_move_index(3).is_ok());
    }

    #[test]
    fn session_from_config() {
        let config = SessionConfig {
            first_player: 2,
            round_opener: RoundOpener::Alternate,
        };
        let session = GameSession::from_config(&config).unwrap();
        assert_eq!(session.current_player(), Player::Two);

        let bad = SessionConfig {
            first_player: 0,
            ..SessionConfig::default()
        };
        assert!(GameSession::from_config(&bad).is_err());
    }

    #[test]
    fn score_leader() {
        let mut score = Score::default();
        assert_eq!(score.leader(), None);
        score.record_win(Player::Two);
        assert_eq!(score.leader(), Some(Player::Two));
        score.record_win(Player::One);
        assert_eq!(score.leader(), None);
    }
}
