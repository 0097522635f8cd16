//! HTTP routes for the game API.
//!
//! The handlers are thin glue: typed request structs are validated by
//! the extractors, then dispatched to the [`GameStore`]. Malformed
//! bodies never reach the engine; illegal moves come back as an
//! ordinary `success: false`.

use crate::store::GameStore;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use knots_tictactoe::Snapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_game_id() -> String {
    "default".to_string()
}

/// Request body naming a game, for create and reset.
#[derive(Debug, Clone, Deserialize)]
pub struct GameRequest {
    /// Game to operate on.
    #[serde(default = "default_game_id")]
    pub game_id: String,
}

/// Query parameters for reading game state.
#[derive(Debug, Clone, Deserialize)]
pub struct StateQuery {
    /// Game to read.
    #[serde(default = "default_game_id")]
    pub game_id: String,
}

/// Request body for making a move.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveRequest {
    /// Game to move in.
    #[serde(default = "default_game_id")]
    pub game_id: String,
    /// Row index, expected in 0-2.
    pub row: i32,
    /// Column index, expected in 0-2.
    pub col: i32,
}

/// Response to a move attempt.
#[derive(Debug, Clone, Serialize)]
pub struct MoveResponse {
    /// Whether the move was applied.
    pub success: bool,
    /// State after the attempt (unchanged when rejected).
    pub state: Snapshot,
}

/// Builds the API router over the given store.
pub fn router(store: GameStore) -> Router {
    Router::new()
        .route("/api/new_game", post(new_game))
        .route("/api/move", post(make_move))
        .route("/api/state", get(get_state))
        .route("/api/reset", post(reset_game))
        .with_state(store)
}

/// `POST /api/new_game` - start a fresh game.
async fn new_game(State(store): State<GameStore>, Json(req): Json<GameRequest>) -> Json<Snapshot> {
    Json(store.create(&req.game_id))
}

/// `POST /api/move` - attempt a move.
async fn make_move(
    State(store): State<GameStore>,
    Json(req): Json<MoveRequest>,
) -> Json<MoveResponse> {
    let success = store.make_move(&req.game_id, req.row, req.col).is_ok();
    Json(MoveResponse {
        success,
        state: store.snapshot(&req.game_id),
    })
}

/// `GET /api/state` - read the current state.
async fn get_state(State(store): State<GameStore>, Query(query): Query<StateQuery>) -> Json<Snapshot> {
    debug!(game_id = %query.game_id, "State requested");
    Json(store.snapshot(&query.game_id))
}

/// `POST /api/reset` - return the game to its initial state.
async fn reset_game(
    State(store): State<GameStore>,
    Json(req): Json<GameRequest>,
) -> Json<Snapshot> {
    Json(store.reset(&req.game_id))
}
