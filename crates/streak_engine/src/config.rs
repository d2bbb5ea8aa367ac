//! Game configuration and creation-time validation.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Configuration for a new game: board dimensions and win length.
///
/// All three parameters are fixed at game creation and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board height (number of rows).
    height: usize,

    /// Board width (number of columns).
    width: usize,

    /// Number of aligned marks required to win.
    win_length: usize,
}

impl GameConfig {
    /// Validates the configuration.
    ///
    /// Dimensions and win length must be positive, and the win length
    /// must fit along the longer board side - otherwise no run of that
    /// length can ever be placed.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.win_length == 0 {
            return Err(ConfigError::ZeroWinLength);
        }
        let longest_side = self.height.max(self.width);
        if self.win_length > longest_side {
            return Err(ConfigError::WinLengthTooLong(self.win_length, longest_side));
        }
        Ok(())
    }
}

/// Configuration error, raised at game or board creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Board height must be positive.
    #[display("board height must be at least 1")]
    ZeroHeight,

    /// Board width must be positive.
    #[display("board width must be at least 1")]
    ZeroWidth,

    /// Win length must be positive.
    #[display("win length must be at least 1")]
    ZeroWinLength,

    /// Win length exceeds the longer board side.
    #[display("win length {} cannot exceed the longer board side ({})", _0, _1)]
    WinLengthTooLong(usize, usize),
}

impl std::error::Error for ConfigError {}
