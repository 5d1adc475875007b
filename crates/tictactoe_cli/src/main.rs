//! Tic-tac-toe terminal front end.

#![warn(missing_docs)]

mod app;
mod cli;
mod simulate;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_core::{Difficulty, EngineConfig, GameEngine, Mode};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            seed,
            config,
        } => run_play(mode, difficulty, seed, config),
        Command::Simulate {
            games,
            difficulty,
            seed,
            json,
        } => run_simulate(games, difficulty, seed, json),
    }
}

/// Run an interactive game.
#[instrument]
fn run_play(
    mode: Option<Mode>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut engine = GameEngine::from_config(&config);
    info!(seed = engine.seed(), "Starting interactive game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let summary = app::run(&mut engine, stdin.lock(), &mut stdout)?;
    info!(?summary, "Session over");
    Ok(())
}

/// Run a batch of games and print the tally.
#[instrument]
fn run_simulate(games: usize, difficulty: Difficulty, seed: Option<u64>, json: bool) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random::<u64>);
    let report = simulate::simulate(games, difficulty, seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
