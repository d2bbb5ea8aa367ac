//! Evaluation strategies: scoring the position after each move.
//!
//! A strategy is a swappable capability selected at game creation. It
//! sees the whole game state but is invoked exactly once per accepted
//! move, and it is pure - no side effects on the game.

mod random;
mod run_detection;

pub use random::RandomStrategy;
pub use run_detection::RunDetection;

use crate::board::Player;
use crate::game::Game;
use serde::{Deserialize, Serialize};

/// Score awarded to a player who completed a winning run.
pub const MAX_SCORE: f64 = 10.0;

/// Score awarded when a player has no winning run.
pub const MIN_SCORE: f64 = -10.0;

const SCORE_TOLERANCE: f64 = 1e-9;

/// Checks whether a score counts as the winning score.
///
/// Scores are floating-point, so the comparison allows a standard
/// tolerance rather than requiring bit equality.
pub fn is_max_score(score: f64) -> bool {
    (score - MAX_SCORE).abs() <= SCORE_TOLERANCE
}

/// Per-player scores produced by one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    x: f64,
    o: f64,
}

impl Evaluation {
    /// Creates an evaluation from explicit per-player scores.
    pub fn new(x: f64, o: f64) -> Self {
        Self { x, o }
    }

    /// Evaluation with no winner: both players at [`MIN_SCORE`].
    pub fn no_winner() -> Self {
        Self::new(MIN_SCORE, MIN_SCORE)
    }

    /// Evaluation for a win: the winner at [`MAX_SCORE`], the opponent
    /// at [`MIN_SCORE`].
    pub fn win_for(winner: Player) -> Self {
        match winner {
            Player::X => Self::new(MAX_SCORE, MIN_SCORE),
            Player::O => Self::new(MIN_SCORE, MAX_SCORE),
        }
    }

    /// Returns the score assigned to the given player.
    pub fn score_for(&self, player: Player) -> f64 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// Capability for scoring a game position.
///
/// Implementations are selected at game creation and invoked by
/// [`Game::play_at`] after each accepted move. [`Game::evaluate_with`]
/// also accepts one directly, so a caller can score a position with a
/// different strategy than the game was created with.
pub trait EvaluationStrategy: std::fmt::Debug {
    /// Scores the current position for both players.
    fn evaluate(&self, game: &Game) -> Evaluation;

    /// Strategy name, surfaced in the per-round result text.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_score_tolerance() {
        assert!(is_max_score(MAX_SCORE));
        assert!(is_max_score(MAX_SCORE + 1e-12));
        assert!(!is_max_score(MIN_SCORE));
        assert!(!is_max_score(9.9));
    }

    #[test]
    fn test_evaluation_win_for() {
        let eval = Evaluation::win_for(Player::O);
        assert_eq!(eval.score_for(Player::O), MAX_SCORE);
        assert_eq!(eval.score_for(Player::X), MIN_SCORE);
    }

    #[test]
    fn test_evaluation_no_winner() {
        let eval = Evaluation::no_winner();
        for player in Player::playables() {
            assert_eq!(eval.score_for(player), MIN_SCORE);
        }
    }
}
