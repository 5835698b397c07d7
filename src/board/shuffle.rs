//! Random-walk shuffling.

use super::moves::{adjacent_to, apply_move};
use super::types::{Board, BoardError, Swap};
use rand::Rng;
use tracing::instrument;

/// Performs `steps` primitive single-swap blank moves, each drawn uniformly
/// from the current blank's grid-adjacent neighbors.
///
/// A candidate is redrawn when it is the exact reverse of the immediately
/// preceding swap, so a shuffle never trivially undoes its own last move.
/// Returns the fully shuffled board together with the applied swaps in
/// order, exactly `steps` of them. The outcome is not checked for
/// solvedness; a shuffle may by chance land on the solved arrangement.
///
/// # Errors
///
/// Propagates [`BoardError::InvalidBoard`] from [`Board::blank_index`].
#[instrument(skip(board, rng))]
pub fn shuffle<R: Rng>(
    board: &Board,
    steps: usize,
    rng: &mut R,
) -> Result<(Board, Vec<Swap>), BoardError> {
    let mut current = board.clone();
    let mut swaps = Vec::with_capacity(steps);
    let mut last: Option<Swap> = None;

    for _ in 0..steps {
        let blank = current.blank_index()?;
        let neighbors = adjacent_to(blank);
        // At least one of the 2..=4 neighbors is not the reverse of the
        // previous swap, so the redraw loop terminates.
        let swap = loop {
            let to = neighbors[rng.gen_range(0..neighbors.len())];
            let candidate = Swap::new(blank, to);
            if last != Some(candidate.reversed()) {
                break candidate;
            }
        };
        current = apply_move(&current, swap);
        swaps.push(swap);
        last = Some(swap);
    }

    Ok((current, swaps))
}
