//! Tic-tac-toe game engine: board state, terminal detection, move
//! selection, and match-history bookkeeping.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over the fixed 3x3 board
//! - **Game**: mutable match orchestration with snapshot-based undo
//! - **Strategies**: random, heuristic, and exhaustive-minimax opponents
//! - **History**: append-only match records behind an injected key-value
//!   store, with pure aggregate statistics
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Difficulty, Game, Position, Strategy};
//!
//! let mut game = Game::new();
//! let mut opponent = Difficulty::Hard.strategy(0);
//!
//! game.play(Position::Center)?;
//! let reply = opponent.choose(game.board(), game.to_move())?;
//! game.play(reply)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod position;
mod rules;
mod stats;
mod store;
mod strategy;
mod types;

// Crate-level exports - Actions and errors
pub use action::{Move, MoveError, MoveRecord};

// Crate-level exports - Game engine
pub use game::{Game, MatchResult, Outcome};

// Crate-level exports - Board geometry
pub use position::Position;

// Crate-level exports - Rules
pub use rules::{check_winner, is_full, Win, WinLine, WIN_LINES};

// Crate-level exports - Match history and statistics
pub use stats::{AggregatedStats, MatchRecord};
pub use store::{KvStore, MatchHistory, MemoryStore, StoreError};

// Crate-level exports - Move selection
pub use strategy::{
    Difficulty, HeuristicStrategy, OptimalStrategy, RandomStrategy, Strategy, StrategyError,
};

// Crate-level exports - Core types
pub use types::{Board, GameStatus, Mark, Player, Square};
