//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They can be validated
//! independently of execution, serialized for replay, and persisted as
//! part of a match record.

use crate::position::Position;
use crate::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// A move as recorded by the engine.
///
/// The record carries the board snapshot taken before the mark was
/// placed, so undo restores state directly instead of replaying from
/// scratch. Records are appended exclusively by [`crate::Game`] and
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveRecord {
    /// The move that was applied.
    mov: Move,
    /// Zero-based position of this move in the match.
    sequence: usize,
    /// Board state immediately before the move.
    board_before: Board,
}

impl MoveRecord {
    pub(crate) fn new(mov: Move, sequence: usize, board_before: Board) -> Self {
        Self {
            mov,
            sequence,
            board_before,
        }
    }
}

/// Errors that can occur when applying or undoing a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The raw cell index does not name a board square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Undo was requested with no moves played.
    #[display("No moves to undo")]
    NothingToUndo,
}

impl std::error::Error for MoveError {}
