//! Game orchestration: turn order, move application, and termination.

use crate::board::{Board, MoveError, Player};
use crate::config::{ConfigError, GameConfig};
use crate::invariants;
use crate::log::{MoveLog, MoveRecord};
use crate::strategy::{is_max_score, Evaluation, EvaluationStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Lifecycle state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be played.
    InProgress,
    /// The last move completed a winning run.
    Finished,
}

/// A running game: board, win length, current turn, move log, and the
/// evaluation strategy chosen at creation.
///
/// Moves are applied as consuming transitions. Playing and passing the
/// turn are two explicit steps, so a caller can inspect the round
/// result before switching players:
///
/// ```
/// use streak_engine::{Game, GameConfig, RunDetection};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let game = Game::new(GameConfig::new(3, 3, 3), Box::new(RunDetection))?;
/// let game = game.play_at(1, 1)?;
/// println!("{}", game.round_result_text().expect("one move played"));
/// let game = game.toggle_turn();
/// assert!(!game.is_done());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Game {
    board: Board,
    win_length: usize,
    to_move: Player,
    strategy: Box<dyn EvaluationStrategy>,
    log: MoveLog,
}

// ─────────────────────────────────────────────────────────────
//  Creation
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Creates a game with an empty board and X to move.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid;
    /// dimensions and win length are fixed once creation succeeds.
    #[instrument(skip(strategy), fields(strategy = strategy.name()))]
    pub fn new(
        config: GameConfig,
        strategy: Box<dyn EvaluationStrategy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(*config.height(), *config.width())?;
        Ok(Self {
            board,
            win_length: *config.win_length(),
            to_move: Player::X,
            strategy,
            log: MoveLog::new(),
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of aligned marks required to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move log.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Name of the evaluation strategy this game was created with.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Current lifecycle state.
    pub fn status(&self) -> GameStatus {
        if self.is_done() {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    /// Checks whether the game has ended.
    ///
    /// False while the log is empty; afterwards, true iff the last
    /// move's score is the winning score.
    pub fn is_done(&self) -> bool {
        match self.log.last() {
            None => false,
            Some(record) => record.score().map_or(false, is_max_score),
        }
    }

    /// Checks whether the given cell can accept the next mark.
    pub fn is_play_valid(&self, row: usize, col: usize) -> bool {
        self.board.is_insert_valid(row, col)
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Plays the current player's mark at the given cell.
    ///
    /// The target is re-validated even when the caller already checked
    /// [`Game::is_play_valid`]. On success the move is recorded with a
    /// post-move board snapshot, the position is scored by the game's
    /// strategy, and the mover's score lands in the new record. The
    /// turn is NOT toggled - see [`Game::toggle_turn`].
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the cell is out of bounds or
    /// occupied.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn play_at(mut self, row: usize, col: usize) -> Result<Self, MoveError> {
        self.board = self.board.insert_at(row, col, self.to_move)?;
        self.log
            .push(MoveRecord::new(self.board.clone(), self.to_move, row, col));

        let evaluation = self.strategy.evaluate(&self);
        let score = evaluation.score_for(self.to_move);
        self.log.set_last_score(score);
        debug!(score, "move evaluated");

        invariants::assert_invariants(&self);
        Ok(self)
    }

    /// Passes the turn to the other player.
    #[instrument(skip(self))]
    pub fn toggle_turn(mut self) -> Self {
        self.to_move = self.to_move.opponent();
        self
    }

    /// Scores the current position with the given strategy.
    ///
    /// The game's own strategy runs automatically inside
    /// [`Game::play_at`]; this entry point lets a caller re-score a
    /// position with a different strategy at run time.
    pub fn evaluate_with(&self, strategy: &dyn EvaluationStrategy) -> Evaluation {
        strategy.evaluate(self)
    }
}

// ─────────────────────────────────────────────────────────────
//  Presentation
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Formats the last move: player, coordinates, score, and the
    /// strategy that produced the score. `None` before the first move.
    pub fn round_result_text(&self) -> Option<String> {
        let last = self.log.last()?;
        let score = last
            .score()
            .map_or_else(|| "unscored".to_string(), |s| s.to_string());
        Some(format!(
            "Player: {}\nInserted at row: {}, col: {}\nScore: {}\nWith strategy: {}",
            last.player(),
            last.row(),
            last.col(),
            score,
            self.strategy.name(),
        ))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\n{}\n\nCurrent player: {}", self.board, self.to_move)
    }
}
