//! Inkbound CLI binary.
//!
//! Plays an interactive branching comic story in the terminal:
//! - `play` starts a story and loops scene, choices, reader input
//! - `doctor` probes the text provider with a single trivial generation

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{run_doctor, run_play, Cli, Commands};

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info,inkbound=debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Play(args) => run_play(args).await?,
        Commands::Doctor => run_doctor().await?,
    }

    Ok(())
}
