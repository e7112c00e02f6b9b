//! Move-selection strategies.
//!
//! A strategy maps a read-only board snapshot and the mark to move to a
//! chosen empty cell. Strategies never mutate the caller's board; the
//! minimax search works on a private scratch clone.

mod heuristic;
mod optimal;
mod random;

pub use heuristic::HeuristicStrategy;
pub use optimal::OptimalStrategy;
pub use random::RandomStrategy;

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

/// Errors that can occur when selecting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StrategyError {
    /// The board has no empty squares; callers should check fullness
    /// before asking for a move.
    #[display("No legal moves on a full board")]
    NoLegalMoves,
}

impl std::error::Error for StrategyError {}

/// A move-selection strategy.
pub trait Strategy {
    /// Chooses an empty cell for `mark` on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::NoLegalMoves`] if the board is full.
    fn choose(&mut self, board: &Board, mark: Player) -> Result<Position, StrategyError>;

    /// Display name of the strategy.
    fn name(&self) -> &'static str;
}

/// Opponent difficulty, mapping to a concrete strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Random moves.
    Easy,
    /// Win, block, center, corner priority rules.
    Medium,
    /// Exhaustive minimax; never loses.
    Hard,
}

impl Difficulty {
    /// Builds the strategy for this difficulty.
    ///
    /// Randomized strategies are constructed from the seed for
    /// reproducibility; [`Difficulty::Hard`] is deterministic and
    /// ignores it.
    #[instrument]
    pub fn strategy(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::new(seed)),
            Difficulty::Medium => Box::new(HeuristicStrategy::new(seed)),
            Difficulty::Hard => Box::new(OptimalStrategy::new()),
        }
    }
}
