//! Medium: hard play half the time, a random square otherwise.

use super::super::{Board, Mark, Position};
use super::hard;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::instrument;

/// Probability of delegating to the hard strategy.
pub const HARD_PLAY_CHANCE: f64 = 0.5;

/// Picks a move for `mark`.
#[instrument(skip(board, rng))]
pub fn select<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<Position> {
    if rng.gen_bool(HARD_PLAY_CHANCE) {
        hard::select(board, mark, rng)
    } else {
        board.empty_positions().choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_hard_branch_takes_center() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(
            select(&Board::new(), Mark::O, &mut rng),
            Some(Position::Center)
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut rng = GameRng::new(5);
        for _ in 0..10 {
            assert_eq!(select(&board, Mark::O, &mut rng), None);
        }
    }
}
