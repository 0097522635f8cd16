//! Game logic and rules for tic-tac-toe.

use crate::types::{GameState, GameStatus, Snapshot};
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move was rejected.
///
/// Rejection is a normal, expected outcome of client input, not a
/// fault; callers fold it into their own success reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
    /// Coordinates are outside the board.
    #[display("coordinates out of bounds (rows and columns run 0-2)")]
    OutOfBounds,
    /// The target cell is already occupied.
    #[display("cell is already occupied")]
    CellOccupied,
}

/// Tic-tac-toe game engine.
///
/// A pure, synchronous state machine over one 3x3 board. It knows
/// nothing about transport or storage; concurrent access to a single
/// engine must be serialized by the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns a by-value snapshot for serialization.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Makes a move at the given coordinates for the current player.
    ///
    /// Coordinates are signed so callers can pass through out-of-range
    /// client input unchanged; anything outside `0..=2` is rejected.
    /// Preconditions are checked in order: game over, bounds, occupancy.
    /// State is mutated only when the move is accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing the first failed precondition.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        if self.state.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if !(0..=2).contains(&row) || !(0..=2).contains(&col) {
            return Err(MoveError::OutOfBounds);
        }
        let (row, col) = (row as usize, col as usize);

        if !self.state.board().is_empty(row, col) {
            return Err(MoveError::CellOccupied);
        }

        let player = self.state.current_player();
        self.state.apply_move(row, col, player);

        // Win is evaluated for the mover, immediately after placement.
        // The current player does not flip on a terminal move.
        if let Some(winner) = self.state.board().winner() {
            self.state.set_status(GameStatus::Won(winner));
        } else if self.state.board().is_full() {
            self.state.set_status(GameStatus::Draw);
        } else {
            self.state.flip_player();
        }

        Ok(())
    }

    /// Resets the game to its initial state. Never fails.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
