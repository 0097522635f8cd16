//! Pure tic-tac-toe (knots and crosses) game logic.
//!
//! This crate is the self-contained core of the game: a deterministic
//! state machine over a 3x3 board with strict alternation, win and
//! draw detection, and an explicit reset. It has no knowledge of
//! transport or session management; the HTTP layer in `knots_server`
//! wraps it.
//!
//! # Example
//!
//! ```
//! use knots_tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! game.make_move(0, 0)?; // X
//! game.make_move(1, 1)?; // O
//! assert_eq!(game.state().current_player(), Player::X);
//! assert_eq!(game.state().status(), GameStatus::InProgress);
//! # Ok::<(), knots_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod rules;
mod types;

pub use rules::{Game, MoveError};
pub use types::{Board, Cell, GameState, GameStatus, Player, Snapshot};
