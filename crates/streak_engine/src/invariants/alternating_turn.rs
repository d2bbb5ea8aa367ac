//! Alternating turn invariant: X and O strictly take turns.

use super::Invariant;
use crate::board::Player;
use crate::game::Game;

/// Invariant: recorded moves alternate players, starting with X.
pub struct AlternatingTurn;

impl Invariant<Game> for AlternatingTurn {
    fn holds(game: &Game) -> bool {
        let mut expected = Player::X;
        for record in game.log().iter() {
            if *record.player() != expected {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "recorded moves alternate players, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::strategy::RunDetection;

    #[test]
    fn test_holds_through_alternating_play() {
        let mut game = Game::new(GameConfig::new(3, 3, 3), Box::new(RunDetection)).unwrap();
        for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 1)] {
            game = game.play_at(row, col).unwrap().toggle_turn();
            assert!(AlternatingTurn::holds(&game));
        }
    }
}
