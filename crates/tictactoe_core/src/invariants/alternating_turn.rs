//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: Marks alternate turns.
///
/// History must read X, O, X, ... and, while the game is ongoing, the mark
/// due to move must follow from the history length.
pub struct AlternatingTurnInvariant;

impl<R> Invariant<GameEngine<R>> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine<R>) -> bool {
        let history = engine.history();

        if history.first().is_some_and(|m| m.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        if engine.outcome().is_terminal() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        engine.current_turn() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, Mode, Move, Position};

    #[test]
    fn test_empty_game_holds() {
        let engine = GameEngine::with_seed(0);
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_computer_reply_holds() {
        let mut engine = GameEngine::with_seed(0);
        engine.start_new_game(Mode::HumanVsComputer, Difficulty::Easy);
        assert!(engine.apply_move(0, 0));
        assert_eq!(engine.history().len(), 2);
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.current_turn(), Mark::X);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut engine = GameEngine::with_seed(0);
        assert!(engine.apply_move(0, 0));

        engine.history.push(Move::new(Mark::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
