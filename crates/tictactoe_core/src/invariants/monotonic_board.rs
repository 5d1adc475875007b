//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameEngine, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an
/// occupied square and must reproduce the live board exactly.
pub struct MonotonicBoardInvariant;

impl<R> Invariant<GameEngine<R>> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine<R>) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.mark));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
