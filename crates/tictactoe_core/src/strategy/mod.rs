//! Move selection for the computer opponent.
//!
//! Every strategy is a pure function of the board, the mark to play and a
//! random source. None of them mutate the board they are given; the engine
//! commits the returned position itself.

pub mod easy;
pub mod hard;
pub mod medium;

pub use hard::{HardChoice, HardRule};

use super::{Board, Difficulty, Mark, Position};
use rand::Rng;
use tracing::{debug, instrument};

/// Picks a move for `mark` at the given difficulty.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    difficulty: Difficulty,
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Option<Position> {
    let choice = match difficulty {
        Difficulty::Easy => easy::select(board, rng),
        Difficulty::Medium => medium::select(board, mark, rng),
        Difficulty::Hard => hard::select(board, mark, rng),
    };
    debug!(?choice, "Strategy selected move");
    choice
}
