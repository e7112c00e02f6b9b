//! Persisted match records and aggregate statistics.

use crate::action::Move;
use crate::game::MatchResult;
use crate::types::Player;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One completed match as persisted: the terminal result, the move list
/// that produced it, and when it was played.
///
/// Records are append-only; history never edits them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MatchRecord {
    /// Terminal result of the match.
    result: MatchResult,
    /// Moves in play order.
    moves: Vec<Move>,
    /// When the match finished (caller-supplied; the engine has no
    /// clock).
    played_at: NaiveDateTime,
}

/// Aggregated statistics over a match history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct AggregatedStats {
    /// Number of recorded matches.
    total_games: usize,
    /// Matches won by X.
    x_wins: usize,
    /// Matches won by O.
    o_wins: usize,
    /// Drawn matches.
    draws: usize,
    /// Rounded mean move count, 0 for an empty history.
    average_moves: usize,
}

impl AggregatedStats {
    /// Reduces a record sequence to aggregate counts.
    ///
    /// A pure fold over the records: no hidden state, same input gives
    /// the same totals.
    #[instrument(skip(records), fields(count = records.len()))]
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let total_games = records.len();
        let x_wins = records
            .iter()
            .filter(|r| r.result().outcome().winner() == Some(Player::X))
            .count();
        let o_wins = records
            .iter()
            .filter(|r| r.result().outcome().winner() == Some(Player::O))
            .count();
        let draws = records
            .iter()
            .filter(|r| r.result().outcome().is_draw() && *r.result().move_count() > 0)
            .count();

        let total_moves: usize = records.iter().map(|r| *r.result().move_count()).sum();
        let average_moves = if total_games == 0 {
            0
        } else {
            (total_moves as f64 / total_games as f64).round() as usize
        };

        Self {
            total_games,
            x_wins,
            o_wins,
            draws,
            average_moves,
        }
    }

    /// Wins recorded for the given mark.
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Win rate for the given mark as a percentage (0.0-100.0).
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            (self.wins(player) as f64 / self.total_games as f64) * 100.0
        }
    }
}
