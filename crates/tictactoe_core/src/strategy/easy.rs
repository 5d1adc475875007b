//! Easy: random play that shies away from corners.

use super::super::{Board, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::instrument;

/// Probability of restricting the pick to non-corner squares.
pub const NON_CORNER_BIAS: f64 = 0.7;

/// Picks a random empty square, preferring edges and center.
///
/// When a non-corner square is free, a [`NON_CORNER_BIAS`] draw decides
/// whether to pick among non-corners only; otherwise any empty square is
/// equally likely.
#[instrument(skip(board, rng))]
pub fn select<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty = board.empty_positions();
    let non_corners: Vec<Position> = empty.iter().copied().filter(|p| !p.is_corner()).collect();

    let pool = if !non_corners.is_empty() && rng.gen_bool(NON_CORNER_BIAS) {
        &non_corners
    } else {
        &empty
    };
    pool.choose(rng).copied()
}
