//! Exhaustive minimax move selection.

use super::{Strategy, StrategyError};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Perfect-play opponent ("hard").
///
/// Full-depth minimax over the remaining game tree; the board is small
/// enough that no pruning or transposition table is needed. Never
/// loses, and wins whenever a forced win exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalStrategy;

impl OptimalStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for OptimalStrategy {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &Board, mark: Player) -> Result<Position, StrategyError> {
        let mut scratch = board.clone();
        let mut best: Option<(i32, Position)> = None;

        for pos in Position::ALL {
            if !scratch.is_empty(pos) {
                continue;
            }
            scratch.set(pos, Square::Occupied(mark));
            let score = minimax(&mut scratch, mark, 0, false);
            scratch.set(pos, Square::Empty);

            // Strict improvement only, so ties resolve to the first
            // candidate in ascending index order.
            if best.is_none_or(|(top, _)| score > top) {
                best = Some((score, pos));
            }
        }

        let (score, pos) = best.ok_or(StrategyError::NoLegalMoves)?;
        debug!(%pos, score, "Best move selected");
        Ok(pos)
    }

    fn name(&self) -> &'static str {
        "optimal"
    }
}

/// Scores the position after a hypothetical move by `mark`'s side.
///
/// Own wins score `10 - depth`, opponent wins `depth - 10`, a full
/// board scores 0. Depth counts plies from the hypothetical root move,
/// which makes the search prefer the fastest win and the slowest loss.
fn minimax(board: &mut Board, mark: Player, depth: i32, maximizing: bool) -> i32 {
    if let Some(win) = rules::check_winner(board) {
        return if win.player == mark {
            10 - depth
        } else {
            depth - 10
        };
    }
    if rules::is_full(board) {
        return 0;
    }

    let to_place = if maximizing { mark } else { mark.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_place));
        let score = minimax(board, mark, depth + 1, !maximizing);
        board.set(pos, Square::Empty);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        // X can win at both TopRight (top row) and BottomLeft (left
        // column); both score 10, so the lower index wins.
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::MiddleRight, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        let mut strategy = OptimalStrategy::new();
        let pos = strategy.choose(&board, Player::X).expect("moves remain");
        assert_eq!(pos, Position::TopRight);
    }

    #[test]
    fn test_terminal_scores_decay_with_depth() {
        // X holds the top row: a won terminal position
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));

        assert_eq!(minimax(&mut board, Player::X, 0, false), 10);
        assert_eq!(minimax(&mut board, Player::X, 2, false), 8);
        assert_eq!(minimax(&mut board, Player::O, 1, true), -9);
    }
}
