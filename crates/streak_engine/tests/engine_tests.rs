//! End-to-end scenarios for the game engine.

use streak_engine::{
    Cell, ConfigError, Game, GameConfig, GameStatus, Player, RandomStrategy, RunDetection,
    MAX_SCORE,
};

/// Plays the moves in order, toggling the turn after each.
fn play(mut game: Game, moves: &[(usize, usize)]) -> Game {
    for &(row, col) in moves {
        assert!(
            game.is_play_valid(row, col),
            "expected ({}, {}) to be playable",
            row,
            col
        );
        game = game.play_at(row, col).expect("legal move").toggle_turn();
    }
    game
}

#[test]
fn test_diagonal_win_on_three_by_three() {
    let game = Game::new(GameConfig::new(3, 3, 3), Box::new(RunDetection)).unwrap();

    // X marches down the main diagonal; O fills the top edge.
    let game = play(game, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

    assert!(game.is_done());
    let last = game.log().last().unwrap();
    assert_eq!(*last.player(), Player::X);
    assert_eq!(*last.score(), Some(MAX_SCORE));
}

#[test]
fn test_horizontal_win_on_five_by_five() {
    let game = Game::new(GameConfig::new(5, 5, 3), Box::new(RunDetection)).unwrap();

    // X builds row 2 at columns 0..=2 with O interleaved elsewhere.
    let game = play(game, &[(2, 0), (4, 4), (2, 1), (3, 3), (2, 2)]);

    assert!(game.is_done());
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(*game.log().last().unwrap().score(), Some(MAX_SCORE));
    assert_eq!(game.log().len(), 5);
}

#[test]
fn test_play_validity_on_five_by_five() {
    let game = Game::new(GameConfig::new(5, 5, 3), Box::new(RunDetection)).unwrap();

    // Out of range: (5, 5) is one past both edges.
    assert!(!game.is_play_valid(5, 5));
    assert!(game.is_play_valid(4, 4));

    let game = play(game, &[(1, 2)]);
    assert!(!game.is_play_valid(1, 2), "occupied cell must be rejected");
}

#[test]
fn test_game_not_done_without_a_run() {
    let game = Game::new(GameConfig::new(5, 5, 3), Box::new(RunDetection)).unwrap();
    let game = play(game, &[(0, 0), (1, 1), (0, 4), (3, 3), (4, 0)]);

    assert!(!game.is_done());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_board_rendering_is_stable() {
    let game = Game::new(GameConfig::new(3, 3, 3), Box::new(RunDetection)).unwrap();
    let game = play(game, &[(0, 0), (1, 1)]);

    let first = game.board().to_string();
    let second = game.board().to_string();
    assert_eq!(first, second);
    assert_eq!(first, "0 X__\n1 _O_\n2 ___\n  012");
}

#[test]
fn test_value_at_does_not_mutate() {
    let game = Game::new(GameConfig::new(3, 3, 3), Box::new(RunDetection)).unwrap();
    let game = play(game, &[(1, 1)]);

    let before = game.board().clone();
    for row in 0..3 {
        for col in 0..3 {
            let _ = game.board().value_at(row, col);
        }
    }
    assert_eq!(*game.board(), before);
    assert_eq!(game.board().value_at(1, 1), Some(Cell::Occupied(Player::X)));
}

#[test]
fn test_invalid_configuration_rejected_at_creation() {
    assert!(matches!(
        Game::new(GameConfig::new(0, 3, 3), Box::new(RunDetection)),
        Err(ConfigError::ZeroHeight)
    ));
    assert!(matches!(
        Game::new(GameConfig::new(4, 6, 7), Box::new(RunDetection)),
        Err(ConfigError::WinLengthTooLong(7, 6))
    ));
}

#[test]
fn test_random_strategy_drives_a_game_to_scores() {
    let game = Game::new(GameConfig::new(3, 3, 3), Box::new(RandomStrategy::seeded(11))).unwrap();
    let game = play(game, &[(0, 0), (0, 1)]);

    // Every accepted move carries a score, whatever the dice said.
    assert_eq!(game.log().len(), 2);
    for record in game.log().iter() {
        assert!(record.score().is_some());
    }
    assert_eq!(game.strategy_name(), "Random");
}

#[test]
fn test_board_serde_round_trip() {
    let game = Game::new(GameConfig::new(4, 4, 3), Box::new(RunDetection)).unwrap();
    let game = play(game, &[(0, 0), (1, 1), (2, 2)]);

    let json = serde_json::to_string(game.board()).unwrap();
    let restored: streak_engine::Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, *game.board());
    assert_eq!(restored.to_string(), game.board().to_string());
}
