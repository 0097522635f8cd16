//! In-memory game store keyed by game id.

use knots_tictactoe::{Game, MoveError, Snapshot};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Unique identifier for a game.
pub type GameId = String;

/// Owns every live game, keyed by id.
///
/// Unknown ids are created on first access so existing clients can
/// start playing without an explicit create call. The mutex serializes
/// mutation, so at most one operation is in flight per store.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Starts a fresh game under the given id, replacing any existing
    /// one, and returns its snapshot.
    #[instrument(skip(self))]
    pub fn create(&self, id: &str) -> Snapshot {
        let mut games = self.games.lock().unwrap();
        let game = Game::new();
        let snapshot = game.snapshot();
        games.insert(id.to_string(), game);
        info!(game_id = id, "Created new game");
        snapshot
    }

    /// Returns a snapshot of the game, creating it on first access.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Snapshot {
        let mut games = self.games.lock().unwrap();
        Self::get_or_create(&mut games, id).snapshot()
    }

    /// Applies a move to the game, creating it on first access.
    ///
    /// Returns the engine's verdict; the state after the attempt is
    /// available through [`GameStore::snapshot`].
    #[instrument(skip(self))]
    pub fn make_move(&self, id: &str, row: i32, col: i32) -> Result<(), MoveError> {
        let mut games = self.games.lock().unwrap();
        let game = Self::get_or_create(&mut games, id);
        let result = game.make_move(row, col);
        match &result {
            Ok(()) => info!(
                game_id = id,
                row,
                col,
                status = ?game.state().status(),
                "Move applied"
            ),
            Err(error) => debug!(game_id = id, row, col, %error, "Move rejected"),
        }
        result
    }

    /// Resets the game to its initial state, creating it on first
    /// access, and returns its snapshot.
    #[instrument(skip(self))]
    pub fn reset(&self, id: &str) -> Snapshot {
        let mut games = self.games.lock().unwrap();
        let game = Self::get_or_create(&mut games, id);
        game.reset();
        info!(game_id = id, "Game reset");
        game.snapshot()
    }

    fn get_or_create<'a>(games: &'a mut HashMap<GameId, Game>, id: &str) -> &'a mut Game {
        games.entry(id.to_string()).or_insert_with(|| {
            debug!(game_id = id, "Unknown game id, creating on access");
            Game::new()
        })
    }
}
