//! Move computation and application over the board.
//!
//! A user-facing move request targets one arbitrary cell; it is realized as
//! a chain of one or more grid-adjacent swaps that walk the blank toward the
//! target along the shared row or column. Legality lives in [`moves_for`];
//! application is a mechanical exchange with no checks.

use super::types::{Board, BoardError, CELL_COUNT, GRID_SIZE, Swap, col_of, row_of};
use tracing::instrument;

/// Computes the chain of adjacent swaps realizing a move request.
///
/// Returns an empty chain when `target` is out of bounds, is the blank
/// itself, or shares neither row nor column with the blank — an illegal
/// request is a no-op, not an error. Otherwise the chain steps the blank
/// one cell at a time toward `target` (1 to 3 swaps on a 4x4 board), each
/// swap starting from the blank's updated position.
///
/// # Errors
///
/// Propagates [`BoardError::InvalidBoard`] from [`Board::blank_index`].
#[instrument(skip_all, fields(cell = target))]
pub fn moves_for(board: &Board, target: usize) -> Result<Vec<Swap>, BoardError> {
    let blank = board.blank_index()?;
    if target >= CELL_COUNT || target == blank {
        return Ok(Vec::new());
    }

    let step: isize = if row_of(target) == row_of(blank) {
        if col_of(target) > col_of(blank) { 1 } else { -1 }
    } else if col_of(target) == col_of(blank) {
        if row_of(target) > row_of(blank) {
            GRID_SIZE as isize
        } else {
            -(GRID_SIZE as isize)
        }
    } else {
        return Ok(Vec::new());
    };

    let mut swaps = Vec::with_capacity(GRID_SIZE - 1);
    let mut current = blank;
    while current != target {
        let next = (current as isize + step) as usize;
        swaps.push(Swap::new(current, next));
        current = next;
    }
    Ok(swaps)
}

/// Exchanges the two slots named by the swap.
///
/// No legality check is performed; this is usable both for real moves and
/// for undo/preview.
///
/// # Panics
///
/// Panics if either index is out of bounds, which indicates a bug in move
/// computation rather than bad input.
pub fn apply_move(board: &Board, swap: Swap) -> Board {
    board.exchanged(swap.from, swap.to)
}

/// Left-folds [`apply_move`] over a swap chain.
pub fn apply_moves(board: &Board, swaps: &[Swap]) -> Board {
    swaps
        .iter()
        .fold(board.clone(), |board, &swap| apply_move(&board, swap))
}

/// Grid-adjacent neighbors of a board slot (2 to 4 cells).
pub fn adjacent_to(idx: usize) -> Vec<usize> {
    let (row, col) = (row_of(idx), col_of(idx));
    let mut neighbors = Vec::with_capacity(4);
    if row > 0 {
        neighbors.push(idx - GRID_SIZE);
    }
    if row < GRID_SIZE - 1 {
        neighbors.push(idx + GRID_SIZE);
    }
    if col > 0 {
        neighbors.push(idx - 1);
    }
    if col < GRID_SIZE - 1 {
        neighbors.push(idx + 1);
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::BLANK;

    // Blank top-left, distinct tags along the first row and column.
    fn corner_board() -> Board {
        Board::from_cells([
            BLANK, 3, 4, 5, //
            6, 0, 1, 2, //
            7, 8, 9, 10, //
            11, 12, 13, 14,
        ])
        .expect("valid permutation")
    }

    #[test]
    fn test_single_horizontal_swap() {
        let board = corner_board();
        let swaps = moves_for(&board, 1).expect("valid board");
        assert_eq!(swaps, vec![Swap::new(0, 1)]);

        let applied = apply_moves(&board, &swaps);
        assert_eq!(applied.get(0), Some(3));
        assert_eq!(applied.get(1), Some(BLANK));
    }

    #[test]
    fn test_single_vertical_swap() {
        let board = corner_board();
        let swaps = moves_for(&board, 4).expect("valid board");
        assert_eq!(swaps, vec![Swap::new(0, 4)]);
    }

    #[test]
    fn test_diagonal_target_yields_no_moves() {
        let board = corner_board();
        assert_eq!(moves_for(&board, 5).expect("valid board"), vec![]);
    }

    #[test]
    fn test_blank_target_yields_no_moves() {
        let board = corner_board();
        assert_eq!(moves_for(&board, 0).expect("valid board"), vec![]);
    }

    #[test]
    fn test_out_of_bounds_target_yields_no_moves() {
        let board = corner_board();
        assert_eq!(moves_for(&board, 16).expect("valid board"), vec![]);
    }

    #[test]
    fn test_three_step_horizontal_chain() {
        let board = corner_board();
        let swaps = moves_for(&board, 3).expect("valid board");
        assert_eq!(
            swaps,
            vec![Swap::new(0, 1), Swap::new(1, 2), Swap::new(2, 3)]
        );

        // Tiles shift one slot left, blank lands on the target.
        let applied = apply_moves(&board, &swaps);
        assert_eq!(&applied.cells()[..4], &[3, 4, 5, BLANK]);
        assert_eq!(&applied.cells()[4..], &board.cells()[4..]);
    }

    #[test]
    fn test_three_step_vertical_chain() {
        let board = corner_board();
        let swaps = moves_for(&board, 12).expect("valid board");
        assert_eq!(
            swaps,
            vec![Swap::new(0, 4), Swap::new(4, 8), Swap::new(8, 12)]
        );

        let applied = apply_moves(&board, &swaps);
        assert_eq!(applied.blank_index(), Ok(12));
    }

    #[test]
    fn test_backward_chain_walks_toward_lower_indices() {
        // Blank bottom-right.
        let board = Board::solved();
        let swaps = moves_for(&board, 12).expect("valid board");
        assert_eq!(
            swaps,
            vec![Swap::new(15, 14), Swap::new(14, 13), Swap::new(13, 12)]
        );
    }

    #[test]
    fn test_chain_round_trips() {
        let board = corner_board();
        for target in 0..CELL_COUNT {
            let swaps = moves_for(&board, target).expect("valid board");
            let forward = apply_moves(&board, &swaps);
            assert!(forward.blank_index().is_ok(), "permutation preserved");

            let reversed: Vec<Swap> = swaps.iter().rev().map(|s| s.reversed()).collect();
            assert_eq!(apply_moves(&forward, &reversed), board);
        }
    }

    #[test]
    fn test_adjacent_counts() {
        assert_eq!(adjacent_to(0).len(), 2);
        assert_eq!(adjacent_to(1).len(), 3);
        assert_eq!(adjacent_to(5).len(), 4);
        assert_eq!(adjacent_to(15).len(), 2);
    }
}
