//! Hard: a fixed priority heuristic, not a game-tree search.
//!
//! 1. Win now if any empty square completes a line.
//! 2. Block a square that would complete a line for the opponent.
//! 3. Take the center.
//! 4. Take a corner, trying corners in shuffled order.
//! 5. Take the first empty square in row-major order.
//!
//! Steps 1 and 2 test each candidate on a copy of the board, so the caller's
//! board is never touched.

use super::super::rules::completes_line;
use super::super::{Board, Mark, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{instrument, trace};

/// Which rule of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum HardRule {
    /// Completes a line for the mover.
    Win,
    /// Occupies the square the opponent needs.
    Block,
    /// Takes the center square.
    Center,
    /// Takes a corner.
    Corner,
    /// Takes the first empty square.
    FirstEmpty,
}

/// A hard-mode decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardChoice {
    /// Square to play.
    pub position: Position,
    /// Rule that chose it.
    pub rule: HardRule,
}

impl HardChoice {
    fn new(position: Position, rule: HardRule) -> Self {
        Self { position, rule }
    }
}

/// Runs the heuristic for `mark` and reports the rule that fired.
#[instrument(skip(board, rng))]
pub fn choose<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<HardChoice> {
    let empty = board.empty_positions();

    if let Some(&pos) = empty.iter().find(|&&pos| completes_line(board, pos, mark)) {
        return Some(HardChoice::new(pos, HardRule::Win));
    }

    let opponent = mark.opponent();
    if let Some(&pos) = empty
        .iter()
        .find(|&&pos| completes_line(board, pos, opponent))
    {
        return Some(HardChoice::new(pos, HardRule::Block));
    }

    if board.is_empty(Position::Center) {
        return Some(HardChoice::new(Position::Center, HardRule::Center));
    }

    let mut corners = Position::CORNERS;
    corners.shuffle(rng);
    trace!(?corners, "Corner order");
    if let Some(&pos) = corners.iter().find(|&&pos| board.is_empty(pos)) {
        return Some(HardChoice::new(pos, HardRule::Corner));
    }

    empty
        .first()
        .map(|&pos| HardChoice::new(pos, HardRule::FirstEmpty))
}

/// Picks a move for `mark`.
pub fn select<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<Position> {
    choose(board, mark, rng).map(|choice| choice.position)
}
