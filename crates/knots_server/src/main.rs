//! Knots server binary.

use anyhow::Result;
use clap::Parser;
use knots_server::{Cli, GameStore, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let app = router(GameStore::new());
    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;

    info!(host = %cli.host, port = cli.port, "Server ready");
    axum::serve(listener, app).await?;

    Ok(())
}
