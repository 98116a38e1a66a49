//! # Lost & Found Board
//!
//! Terminal entry point: browse the campus lost and found feed, filter it,
//! and post new items. Everything is kept in memory for this session only.

use lostfound_core::ports::PostStore;
use tokio::io::BufReader;

mod commands;
mod config;
mod convert;
mod error;
mod render;
mod session;
mod shell;
mod state;
mod telemetry;

use config::AppConfig;
use session::BoardSession;
use shell::Shell;
use state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        title = %config.title,
        seed_samples = config.seed_samples,
        "Starting lost and found board"
    );

    let state = AppState::new(&config);
    let session = BoardSession::new(state.store.clone());

    let mut shell = Shell::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        session,
        config.title.clone(),
    );
    shell.run().await?;

    tracing::info!(
        posts = state.store.len().await,
        "Session closed; posts are not kept"
    );

    Ok(())
}
