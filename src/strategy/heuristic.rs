//! Priority-rule move selection.

use super::{Strategy, StrategyError};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

const CORNERS: [Position; 4] = [
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];

/// Fixed-priority opponent ("medium").
///
/// In strict order: take an immediate win, block the opponent's
/// immediate win, take the center, take a random empty corner, fall
/// back to a random empty square. Win and block scans run in ascending
/// index order and take the first hit, so only the corner and fallback
/// steps consume randomness.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy {
    rng: ChaCha8Rng,
}

impl HeuristicStrategy {
    /// Creates a strategy seeded for a deterministic move sequence.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// First empty square that completes a line for `player`, scanning
    /// in ascending index order.
    fn winning_square(board: &Board, player: Player) -> Option<Position> {
        let mut scratch = board.clone();
        for pos in Position::ALL {
            if !scratch.is_empty(pos) {
                continue;
            }
            scratch.set(pos, Square::Occupied(player));
            let wins = rules::check_winner(&scratch).is_some_and(|win| win.player == player);
            scratch.set(pos, Square::Empty);
            if wins {
                return Some(pos);
            }
        }
        None
    }
}

impl Strategy for HeuristicStrategy {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &Board, mark: Player) -> Result<Position, StrategyError> {
        if board.is_full() {
            return Err(StrategyError::NoLegalMoves);
        }

        if let Some(pos) = Self::winning_square(board, mark) {
            debug!(%pos, "Taking the win");
            return Ok(pos);
        }

        if let Some(pos) = Self::winning_square(board, mark.opponent()) {
            debug!(%pos, "Blocking");
            return Ok(pos);
        }

        if board.is_empty(Position::Center) {
            return Ok(Position::Center);
        }

        let open_corners: Vec<Position> = CORNERS
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect();
        if let Some(&pos) = open_corners.choose(&mut self.rng) {
            return Ok(pos);
        }

        Position::valid_moves(board)
            .choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::NoLegalMoves)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
