//! Core domain types for the 15-puzzle board.

use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cells per row and per column.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Cell tag of the blank. Tags `0..15` are numbered tiles.
pub const BLANK: u8 = 15;

/// Row of a board index (integer division, no float math).
pub fn row_of(idx: usize) -> usize {
    idx / GRID_SIZE
}

/// Column of a board index.
pub fn col_of(idx: usize) -> usize {
    idx % GRID_SIZE
}

/// Errors raised by board operations.
///
/// Any of these indicates a corrupted board, which is a logic bug in move
/// application rather than bad user input. Callers should abort instead of
/// continuing with the board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The board holds a wrong number of blank cells.
    #[display("invalid board: found {blank_count} blank cells, expected exactly 1")]
    InvalidBoard {
        /// How many blanks were found.
        blank_count: usize,
    },
    /// The cell sequence is not a permutation of `0..16`.
    #[display("invalid board: cells are not a permutation of 0..16")]
    NotAPermutation,
}

/// An ordered exchange of two board slots.
///
/// Produced by [`moves_for`](crate::moves_for) as chains of grid-adjacent
/// exchanges. Application is symmetric, so undoing a swap means applying it
/// again in either orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Swap {
    /// Slot the blank currently occupies.
    pub from: usize,
    /// Slot the blank moves into.
    pub to: usize,
}

impl Swap {
    /// The same exchange read in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// 4x4 sliding-tile board.
///
/// Cells are stored in row-major order (index 0 = top-left, 15 =
/// bottom-right) and are always a permutation of `0..16`, so exactly one
/// blank exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cell tags in row-major order.
    cells: [u8; CELL_COUNT],
}

impl Board {
    /// The canonical solved board: ascending tiles with the blank last.
    pub fn solved() -> Self {
        let mut cells = [0u8; CELL_COUNT];
        for (tag, cell) in cells.iter_mut().enumerate() {
            *cell = tag as u8;
        }
        Self { cells }
    }

    /// Builds a board from raw cell tags, validating the permutation
    /// invariant.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotAPermutation`] if any tag is out of range
    /// or duplicated.
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Result<Self, BoardError> {
        let mut seen = [false; CELL_COUNT];
        for &cell in &cells {
            let tag = cell as usize;
            if tag >= CELL_COUNT || seen[tag] {
                return Err(BoardError::NotAPermutation);
            }
            seen[tag] = true;
        }
        Ok(Self { cells })
    }

    /// Gets the cell tag at the given index.
    pub fn get(&self, idx: usize) -> Option<u8> {
        self.cells.get(idx).copied()
    }

    /// All cells as a slice, row-major.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// True iff the sequence is non-decreasing, i.e. the canonical
    /// ascending permutation with the blank in the last cell. This is the
    /// single win condition.
    pub fn is_solved(&self) -> bool {
        self.cells.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Locates the unique blank cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidBoard`] if zero or more than one blank
    /// is found. Given the permutation invariant this never happens; the
    /// check is defensive and signals a bug in move application.
    pub fn blank_index(&self) -> Result<usize, BoardError> {
        let mut blanks = self.cells.iter().enumerate().filter(|&(_, &c)| c == BLANK);
        match (blanks.next(), blanks.next()) {
            (Some((idx, _)), None) => Ok(idx),
            (None, _) => Err(BoardError::InvalidBoard { blank_count: 0 }),
            (Some(_), Some(_)) => Err(BoardError::InvalidBoard {
                blank_count: 2 + blanks.count(),
            }),
        }
    }

    /// Indices the blank could move to in one direct move request: every
    /// cell in the blank's row and column, excluding the blank itself.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError::InvalidBoard`] from [`Board::blank_index`].
    pub fn swappables(&self) -> Result<Vec<usize>, BoardError> {
        let blank = self.blank_index()?;
        let (row, col) = (row_of(blank), col_of(blank));
        let mut mates = Vec::with_capacity(2 * (GRID_SIZE - 1));
        for c in 0..GRID_SIZE {
            let idx = row * GRID_SIZE + c;
            if idx != blank {
                mates.push(idx);
            }
        }
        for r in 0..GRID_SIZE {
            let idx = r * GRID_SIZE + col;
            if idx != blank {
                mates.push(idx);
            }
        }
        Ok(mates)
    }

    /// Returns a copy of the board with two slots exchanged.
    pub(crate) fn exchanged(&self, from: usize, to: usize) -> Self {
        let mut cells = self.cells;
        cells.swap(from, to);
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let cell = self.cells[row * GRID_SIZE + col];
                if cell == BLANK {
                    write!(f, "  _")?;
                } else {
                    write!(f, " {:2}", cell + 1)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
