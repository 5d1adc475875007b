//! Tic-tac-toe game engine.
//!
//! The engine owns the board, enforces turn order, derives the outcome after
//! every ply and, in human-vs-computer games, answers each human move with a
//! computer move at one of three difficulty levels.
//!
//! # Architecture
//!
//! - **Types**: marks, squares, the board, mode, difficulty and outcome
//! - **Rules**: pure line scans for wins and draws
//! - **Strategy**: easy, medium and hard move selection over any `rand::Rng`
//! - **Engine**: the state machine that ties them together
//! - **Invariants**: properties checked after every ply
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Difficulty, GameEngine, Mark, Mode, Outcome};
//!
//! let mut engine = GameEngine::with_seed(7);
//! engine.start_new_game(Mode::HumanVsComputer, Difficulty::Hard);
//!
//! assert!(engine.apply_move(0, 0));
//! // The computer has already answered; it is X's turn again.
//! assert_eq!(engine.current_turn(), Mark::X);
//! assert_eq!(engine.history().len(), 2);
//! assert_eq!(engine.outcome(), Outcome::Ongoing);
//!
//! // Occupied squares are refused without changing anything.
//! assert!(!engine.apply_move(0, 0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod position;
mod rng;
mod types;

pub mod invariants;
pub mod rules;
pub mod strategy;

pub use action::{Move, MoveError};
pub use config::{ConfigError, EngineConfig};
pub use engine::{COMPUTER_MARK, GameEngine, PlyReport};
pub use position::Position;
pub use rng::GameRng;
pub use types::{Board, BoardParseError, Difficulty, Mark, Mode, Outcome, Square};
