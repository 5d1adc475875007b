//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Difficulty, Mode};

/// Tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// human-vs-human or human-vs-computer (overrides the config file)
        #[arg(long)]
        mode: Option<Mode>,

        /// easy, medium or hard (overrides the config file)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Path to an engine config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Pit a random X against the computer and tally the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: usize,

        /// Computer difficulty
        #[arg(long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for both sides' random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
