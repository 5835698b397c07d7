//! Board algebra: pure functions over an immutable 4x4 tile arrangement.

mod moves;
mod shuffle;
mod types;

pub use moves::{adjacent_to, apply_move, apply_moves, moves_for};
pub use shuffle::shuffle;
pub use types::{BLANK, Board, BoardError, CELL_COUNT, GRID_SIZE, Swap, col_of, row_of};
