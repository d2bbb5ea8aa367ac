//! Append-only log of the moves played in a game.

use crate::board::{Board, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A recorded move: the acting player, the target cell, the board
/// snapshot after the mark was placed, and the score the evaluation
/// strategy assigned to the mover.
///
/// The score starts out unset and is filled in immediately after
/// evaluation; a record is never mutated afterward.
#[derive(Debug, Clone, PartialEq, Getters, new, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Board snapshot taken after this move was applied.
    board: Board,

    /// The player who made the move.
    player: Player,

    /// Target row.
    row: usize,

    /// Target column.
    col: usize,

    /// Score assigned to the mover by the evaluation strategy.
    #[new(default)]
    score: Option<f64>,
}

impl MoveRecord {
    pub(crate) fn set_score(&mut self, score: f64) {
        self.score = Some(score);
    }
}

/// Ordered, append-only sequence of move records.
///
/// Insertion order is play order. Records can only be appended from
/// within the engine; external code reads but never rewrites history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveLog {
    entries: Vec<MoveRecord>,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.entries.push(record);
    }

    pub(crate) fn set_last_score(&mut self, score: f64) {
        if let Some(record) = self.entries.last_mut() {
            record.set_score(score);
        }
    }

    /// Returns the most recent record, if any move has been played.
    pub fn last(&self) -> Option<&MoveRecord> {
        self.entries.last()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if no move has been played yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the records in play order.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.entries.iter()
    }
}
