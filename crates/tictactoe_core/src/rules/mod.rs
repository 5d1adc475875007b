//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine never caches their answers;
//! the outcome is recomputed from the board after every ply.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, completes_line, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// A completed line wins (first line in scan order), otherwise a full board
/// is a draw, otherwise the game goes on.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
