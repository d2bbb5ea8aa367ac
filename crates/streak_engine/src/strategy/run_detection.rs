//! Run detection: the primary evaluation strategy.
//!
//! Only the most recent move can complete a winning run, so the search
//! is local: walk the eight rays emanating from the last move's cell
//! and measure the longest aligned run through it.

use super::{Evaluation, EvaluationStrategy};
use crate::board::{Board, Cell, Player};
use crate::game::Game;
use tracing::{debug, instrument};

/// Unit steps for the four axes through a cell: horizontal, vertical,
/// main diagonal, anti-diagonal. Each axis is walked in this direction
/// and its opposite.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Detects a run of the game's win length through the last move.
///
/// For each axis the two opposing rays are counted excluding the pivot
/// cell, then summed with 1 added for the pivot. The rule is the same
/// for all four axes, so no axis needs a double-count correction.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunDetection;

impl RunDetection {
    /// Counts consecutive cells holding `player`'s mark, starting at
    /// the cell adjacent to `(row, col)` and walking outward one
    /// `(step_row, step_col)` at a time. Stops at the first other cell
    /// or the board edge. The pivot itself is not counted.
    fn ray_length(
        board: &Board,
        player: Player,
        row: usize,
        col: usize,
        step_row: isize,
        step_col: isize,
    ) -> usize {
        let mut length = 0;
        let mut row = row as isize + step_row;
        let mut col = col as isize + step_col;
        while row >= 0
            && col >= 0
            && matches!(
                board.value_at(row as usize, col as usize),
                Some(Cell::Occupied(mark)) if mark == player
            )
        {
            length += 1;
            row += step_row;
            col += step_col;
        }
        length
    }

    /// Longest consecutive run of `player`'s marks through the pivot
    /// cell, across all four axes. The pivot is counted exactly once
    /// per axis.
    fn longest_run_through(board: &Board, player: Player, row: usize, col: usize) -> usize {
        AXES.iter()
            .map(|&(step_row, step_col)| {
                let forward = Self::ray_length(board, player, row, col, step_row, step_col);
                let backward = Self::ray_length(board, player, row, col, -step_row, -step_col);
                forward + backward + 1
            })
            .max()
            .expect("four axes")
    }
}

impl EvaluationStrategy for RunDetection {
    #[instrument(skip(self, game))]
    fn evaluate(&self, game: &Game) -> Evaluation {
        let Some(last) = game.log().last() else {
            return Evaluation::no_winner();
        };

        let player = *last.player();
        let run = Self::longest_run_through(last.board(), player, *last.row(), *last.col());
        debug!(?player, row = last.row(), col = last.col(), run, "longest run through last move");

        if run >= game.win_length() {
            Evaluation::win_for(player)
        } else {
            Evaluation::no_winner()
        }
    }

    fn name(&self) -> &'static str {
        "RunDetection"
    }
}
