//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::board::Board;
use crate::game::Game;

/// Invariant: the board is exactly the log replayed from empty.
///
/// Replaying every recorded move onto a fresh board must reproduce the
/// current board without ever touching an occupied cell. A mismatch
/// means a cell was overwritten or the log diverged from the board.
pub struct MonotonicBoard;

impl Invariant<Game> for MonotonicBoard {
    fn holds(game: &Game) -> bool {
        let Ok(mut replayed) = Board::new(game.board().height(), game.board().width()) else {
            return false;
        };

        for record in game.log().iter() {
            match replayed.insert_at(*record.row(), *record.col(), *record.player()) {
                Ok(next) => replayed = next,
                Err(_) => return false,
            }
        }

        replayed == *game.board()
    }

    fn description() -> &'static str {
        "board matches the move log replayed from empty; no cell is overwritten"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::strategy::RunDetection;

    fn game() -> Game {
        Game::new(GameConfig::new(3, 3, 3), Box::new(RunDetection)).unwrap()
    }

    #[test]
    fn test_holds_for_fresh_game() {
        assert!(MonotonicBoard::holds(&game()));
    }

    #[test]
    fn test_holds_after_moves() {
        let game = game()
            .play_at(0, 0)
            .unwrap()
            .toggle_turn()
            .play_at(1, 1)
            .unwrap()
            .toggle_turn();
        assert!(MonotonicBoard::holds(&game));
    }
}
