//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and serve as documentation of the
//! engine's guarantees.

mod alternating_turn;
mod monotonic_board;

pub use alternating_turn::AlternatingTurn;
pub use monotonic_board::MonotonicBoard;

use crate::game::Game;
use tracing::instrument;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Asserts all game invariants; panics on violation in debug builds.
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    debug_assert!(MonotonicBoard::holds(game), "{}", MonotonicBoard::description());
    debug_assert!(AlternatingTurn::holds(game), "{}", AlternatingTurn::description());
}
