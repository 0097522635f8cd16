//! Command-line interface for the game server.

use clap::Parser;

/// Knots server - tic-tac-toe over HTTP
#[derive(Parser, Debug)]
#[command(name = "knots_server")]
#[command(about = "Serves tic-tac-toe games over a REST API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,
}
