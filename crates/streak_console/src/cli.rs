//! Command-line interface for the console game.

use clap::{Parser, ValueEnum};
use streak_engine::{EvaluationStrategy, RandomStrategy, RunDetection};

/// Generalized tic-tac-toe: first to align K marks on an M x N board.
#[derive(Parser, Debug)]
#[command(name = "streak_console")]
#[command(about = "Play generalized tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board height (rows).
    #[arg(long, default_value_t = 5)]
    pub height: usize,

    /// Board width (columns).
    #[arg(long, default_value_t = 5)]
    pub width: usize,

    /// Marks in a row required to win.
    #[arg(short = 'k', long, default_value_t = 3)]
    pub win_length: usize,

    /// Evaluation strategy used to score each move.
    #[arg(long, value_enum, default_value = "run-detection")]
    pub strategy: StrategyChoice,
}

/// Selectable evaluation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// Score each move by detecting runs through it.
    RunDetection,
    /// Score each move at random (no win semantics; for exploration).
    Random,
}

impl StrategyChoice {
    /// Builds the chosen strategy.
    pub fn build(self) -> Box<dyn EvaluationStrategy> {
        match self {
            StrategyChoice::RunDetection => Box::new(RunDetection),
            StrategyChoice::Random => Box::new(RandomStrategy::new()),
        }
    }
}
