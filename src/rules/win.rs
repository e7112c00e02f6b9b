//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight fixed winning triples.
pub type WinLine = [Position; 3];

/// The eight win lines in scan priority order: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A detected win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// Player holding the line.
    pub player: Player,
    /// The first fully-matched line in scan order.
    pub line: WinLine,
}

/// Checks if there is a winner on the board.
///
/// Scans [`WIN_LINES`] in order and returns the first line where all
/// three squares share the same mark. In legal play at most one player
/// can hold a completed line, so scan order only decides which of a
/// winner's multiple lines gets reported.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(Win { player, line });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));

        let win = check_winner(&board).expect("X holds the top row");
        assert_eq!(win.player, Player::X);
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        let win = check_winner(&board).expect("O holds the diagonal");
        assert_eq!(win.player, Player::O);
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::BottomCenter, Square::Occupied(Player::X));

        let win = check_winner(&board).expect("X holds the middle column");
        assert_eq!(
            win.line,
            [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter
            ]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }
}
