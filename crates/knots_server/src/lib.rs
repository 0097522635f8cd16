//! HTTP boundary for tic-tac-toe games.
//!
//! Wraps the [`knots_tictactoe`] engine in a small axum REST API over
//! an in-memory store of games keyed by id. State is process-local;
//! restarting the server forgets every game.
//!
//! # Example
//!
//! ```no_run
//! use knots_server::{GameStore, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let app = router(GameStore::new());
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 5000)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod routes;
mod store;

pub use cli::Cli;
pub use routes::{GameRequest, MoveRequest, MoveResponse, StateQuery, router};
pub use store::{GameId, GameStore};
