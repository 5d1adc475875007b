//! History consistency invariant: history length matches occupied squares.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: History length equals number of occupied squares.
pub struct HistoryConsistentInvariant;

impl<R> Invariant<GameEngine<R>> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine<R>) -> bool {
        engine.history().len() == engine.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
