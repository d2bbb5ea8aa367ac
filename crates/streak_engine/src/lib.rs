//! Pure M,N,K-game logic with pluggable evaluation strategies.
//!
//! A generalized tic-tac-toe: two players alternate placing marks on
//! an M x N board, and the first to align `K` marks wins. The engine
//! is synchronous, single-threaded, and free of I/O - a front-end owns
//! the prompt/print loop and drives the game through value transforms.
//!
//! # Architecture
//!
//! - **Board**: bounds/occupancy checks and pure snapshot updates
//! - **Move log**: append-only record of every move and its score
//! - **Evaluation strategy**: swappable scorer; run detection inspects
//!   the rays through the last move
//! - **Game**: turn order, move application, and termination
//!
//! # Example
//!
//! ```
//! use streak_engine::{Game, GameConfig, RunDetection, MAX_SCORE};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(GameConfig::new(3, 3, 3), Box::new(RunDetection))?;
//!
//! // X takes the top row while O trails behind.
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game = game.play_at(row, col)?.toggle_turn();
//! }
//!
//! assert!(game.is_done());
//! assert_eq!(*game.log().last().unwrap().score(), Some(MAX_SCORE));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod game;
pub mod invariants;
mod log;
pub mod strategy;

// Crate-level exports - board and marks
pub use board::{Board, Cell, MoveError, Player};

// Crate-level exports - configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - orchestration
pub use game::{Game, GameStatus};

// Crate-level exports - move log
pub use log::{MoveLog, MoveRecord};

// Crate-level exports - evaluation
pub use strategy::{
    is_max_score, Evaluation, EvaluationStrategy, RandomStrategy, RunDetection, MAX_SCORE,
    MIN_SCORE,
};
