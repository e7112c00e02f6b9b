//! Match orchestration for tic-tac-toe.
//!
//! The two original front ends each carried their own copy of this
//! logic; it lives here once, behind a plain mutable state machine that
//! any front end can drive.

use crate::action::{Move, MoveError, MoveRecord};
use crate::position::Position;
use crate::rules;
use crate::rules::WinLine;
use crate::types::{Board, GameStatus, Player, Square};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {:?} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Terminal result of one completed board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MatchResult {
    /// Who won, or a draw.
    outcome: Outcome,
    /// The completed line on a win, `None` on a draw.
    winning_line: Option<WinLine>,
    /// Number of moves played in the match.
    move_count: usize,
}

/// Tic-tac-toe game engine.
///
/// Owns the board, the mark to move, and the move record stack. The
/// board itself stays turn-agnostic; alternation happens here, starting
/// with [`Player::X`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the move records, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Plays the pending mark at the given position.
    ///
    /// On a terminal move the result is returned for the caller to
    /// persist; otherwise the mark to move flips and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the match already ended, or
    /// [`MoveError::SquareOccupied`] if the square is taken. State is
    /// unchanged on error.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<Option<MatchResult>, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mov = Move::new(self.to_move, pos);
        self.history
            .push(MoveRecord::new(mov, self.history.len(), self.board.clone()));
        self.board.set(pos, Square::Occupied(self.to_move));

        if let Some(win) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(win.player);
            debug!(winner = ?win.player, moves = self.history.len(), "Match won");
            return Ok(Some(MatchResult::new(
                Outcome::Winner(win.player),
                Some(win.line),
                self.history.len(),
            )));
        }

        if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            debug!(moves = self.history.len(), "Match drawn");
            return Ok(Some(MatchResult::new(
                Outcome::Draw,
                None,
                self.history.len(),
            )));
        }

        self.to_move = self.to_move.opponent();
        Ok(None)
    }

    /// Plays at a raw cell index (0-8).
    ///
    /// Entry point for callers holding cell numbers instead of
    /// [`Position`] values.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices past 8, plus the
    /// errors of [`Game::play`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<Option<MatchResult>, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Undoes the most recent move.
    ///
    /// Restores the snapshot stored in the move record and hands the
    /// turn back to the player who made the move. A finished game
    /// reopens to in-progress.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NothingToUndo`] if no moves were played.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), MoveError> {
        let record = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        debug!(sequence = record.sequence(), "Undoing move");
        self.board = record.board_before().clone();
        self.to_move = record.mov().player;
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Replays a move list from an empty board.
    ///
    /// # Errors
    ///
    /// Propagates the first [`MoveError`], including [`MoveError::GameOver`]
    /// when moves continue past a terminal state.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &pos in moves {
            game.play(pos)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
