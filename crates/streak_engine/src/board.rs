//! Core domain types: players, cells, and the board.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Printable glyph for this player's mark.
    pub fn glyph(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// All playable marks, in turn order (X first).
    pub fn playables() -> impl Iterator<Item = Player> {
        <Player as strum::IntoEnumIterator>::iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Printable glyph for this cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Occupied(player) => player.glyph(),
        }
    }
}

/// Error that can occur when targeting a cell for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target coordinates fall outside the board.
    #[display("target ({}, {}) is outside the board", _0, _1)]
    OutOfBounds(usize, usize),

    /// The target cell already holds a mark.
    #[display("cell ({}, {}) is already occupied", _0, _1)]
    Occupied(usize, usize),
}

impl std::error::Error for MoveError {}

/// An M x N board of cells, row-major.
///
/// Cells start empty and are monotonic: once occupied, a cell never
/// reverts. Updates are pure - [`Board::insert_at`] returns a new
/// snapshot and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either dimension is zero.
    #[instrument]
    pub fn new(height: usize, width: usize) -> Result<Self, ConfigError> {
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        })
    }

    /// Board height (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Board width (number of columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the cell at the given coordinates, or `None` out of range.
    pub fn value_at(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Checks whether a mark can be inserted at the given coordinates.
    ///
    /// True iff the coordinates are in bounds and the cell is empty.
    /// Out-of-range coordinates answer `false`, never an error, so a
    /// caller can re-prompt without handling a failure path.
    pub fn is_insert_valid(&self, row: usize, col: usize) -> bool {
        matches!(self.value_at(row, col), Some(Cell::Empty))
    }

    /// Places a player's mark, returning the updated board snapshot.
    ///
    /// The target is re-validated here: misuse fails loudly instead of
    /// silently overwriting a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] or [`MoveError::Occupied`]
    /// when the target cannot accept a mark.
    #[instrument(skip(self))]
    pub fn insert_at(&self, row: usize, col: usize, player: Player) -> Result<Self, MoveError> {
        match self.value_at(row, col) {
            None => Err(MoveError::OutOfBounds(row, col)),
            Some(Cell::Occupied(_)) => Err(MoveError::Occupied(row, col)),
            Some(Cell::Empty) => {
                let mut next = self.clone();
                next.cells[row * self.width + col] = Cell::Occupied(player);
                Ok(next)
            }
        }
    }
}

impl std::fmt::Display for Board {
    /// Renders each row prefixed with its row index, followed by a
    /// trailing column index header.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            write!(f, "{} ", row)?;
            for col in 0..self.width {
                write!(f, "{}", self.cells[row * self.width + col].glyph())?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..self.width {
            write!(f, "{}", col)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playables_in_turn_order() {
        let players: Vec<Player> = Player::playables().collect();
        assert_eq!(players, vec![Player::X, Player::O]);
    }

    #[test]
    fn test_new_board_all_empty() {
        let board = Board::new(3, 4).expect("valid dimensions");
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(board.value_at(row, col), Some(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(Board::new(0, 3), Err(ConfigError::ZeroHeight));
        assert_eq!(Board::new(3, 0), Err(ConfigError::ZeroWidth));
    }

    #[test]
    fn test_insert_valid_in_bounds_empty() {
        let board = Board::new(3, 3).unwrap();
        assert!(board.is_insert_valid(0, 0));
        assert!(board.is_insert_valid(2, 2));
    }

    #[test]
    fn test_insert_valid_false_out_of_range() {
        let board = Board::new(3, 3).unwrap();
        assert!(!board.is_insert_valid(3, 0));
        assert!(!board.is_insert_valid(0, 3));
        assert!(!board.is_insert_valid(usize::MAX, usize::MAX));
    }

    #[test]
    fn test_insert_valid_false_when_occupied() {
        let board = Board::new(3, 3).unwrap();
        let board = board.insert_at(1, 1, Player::X).unwrap();
        assert!(!board.is_insert_valid(1, 1));
    }

    #[test]
    fn test_insert_at_returns_new_snapshot() {
        let board = Board::new(3, 3).unwrap();
        let next = board.insert_at(0, 2, Player::O).unwrap();

        // Receiver is untouched, snapshot holds the mark.
        assert_eq!(board.value_at(0, 2), Some(Cell::Empty));
        assert_eq!(next.value_at(0, 2), Some(Cell::Occupied(Player::O)));
    }

    #[test]
    fn test_insert_at_rejects_out_of_bounds() {
        let board = Board::new(2, 2).unwrap();
        assert_eq!(
            board.insert_at(2, 0, Player::X),
            Err(MoveError::OutOfBounds(2, 0))
        );
    }

    #[test]
    fn test_insert_at_rejects_occupied() {
        let board = Board::new(2, 2).unwrap();
        let board = board.insert_at(0, 0, Player::X).unwrap();
        assert_eq!(
            board.insert_at(0, 0, Player::O),
            Err(MoveError::Occupied(0, 0))
        );
    }

    #[test]
    fn test_display_layout() {
        let board = Board::new(2, 3).unwrap();
        let board = board.insert_at(0, 1, Player::X).unwrap();
        let board = board.insert_at(1, 2, Player::O).unwrap();

        assert_eq!(board.to_string(), "0 _X_\n1 __O\n  012");
    }

    #[test]
    fn test_display_is_read_only() {
        let board = Board::new(4, 4).unwrap();
        let board = board.insert_at(2, 2, Player::X).unwrap();

        let first = board.to_string();
        let second = board.to_string();
        assert_eq!(first, second);
    }
}
