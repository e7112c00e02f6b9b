//! Uniformly random move selection.

use super::{Strategy, StrategyError};
use crate::position::Position;
use crate::types::{Board, Player};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::instrument;

/// Picks uniformly among the empty squares ("easy").
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a strategy seeded for a deterministic move sequence.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &Board, _mark: Player) -> Result<Position, StrategyError> {
        Position::valid_moves(board)
            .choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::NoLegalMoves)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
