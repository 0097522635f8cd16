//! Tests for the snapshot wire format.

use knots_tictactoe::{Game, Snapshot};
use serde_json::json;

#[test]
fn test_fresh_snapshot_json() {
    let game = Game::new();
    let value = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(
        value,
        json!({
            "board": [["", "", ""], ["", "", ""], ["", "", ""]],
            "current_player": "X",
            "winner": null,
            "game_over": false,
        })
    );
}

#[test]
fn test_won_snapshot_json() {
    let mut game = Game::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        game.make_move(row, col).unwrap();
    }
    let value = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(
        value,
        json!({
            "board": [["X", "X", "X"], ["", "O", ""], ["", "", "O"]],
            "current_player": "X",
            "winner": "X",
            "game_over": true,
        })
    );
}

#[test]
fn test_snapshot_round_trips() {
    let mut game = Game::new();
    game.make_move(1, 1).unwrap();
    game.make_move(0, 2).unwrap();

    let snapshot = game.snapshot();
    let encoded = serde_json::to_string(&snapshot).unwrap();
    let decoded: Snapshot = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, snapshot);
}
