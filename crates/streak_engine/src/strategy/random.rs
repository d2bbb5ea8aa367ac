//! Random evaluation, for exercising the scoring plumbing.
//!
//! Assigns each player an independent uniform integer score. Carries no
//! win semantics - a game driven by this strategy terminates whenever
//! the dice happen to land on the maximum score.

use super::{Evaluation, EvaluationStrategy, MAX_SCORE, MIN_SCORE};
use crate::game::Game;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;

/// Scores each player with an independent random integer in
/// `[MIN_SCORE, MAX_SCORE]`, inclusive.
///
/// Seedable for deterministic tests; the game sees the strategy as
/// stateless, so the generator hides behind interior mutability.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomStrategy {
    /// Creates a strategy seeded from entropy.
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Creates a strategy with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationStrategy for RandomStrategy {
    fn evaluate(&self, _game: &Game) -> Evaluation {
        let mut rng = self.rng.borrow_mut();
        let mut draw = || rng.gen_range(MIN_SCORE as i64..=MAX_SCORE as i64) as f64;
        Evaluation::new(draw(), draw())
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}
