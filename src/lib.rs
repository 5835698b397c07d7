//! Fifteen - pure 15-puzzle game logic.
//!
//! Two layers, leaves first:
//!
//! - **Board algebra**: pure functions over an immutable 4x4 tile
//!   arrangement - legality checks, move chains, application, shuffling,
//!   solved-test. No mutable state, no I/O.
//! - **Session state machine**: a closed set of phases (solved, playable,
//!   mid-swap, mid-shuffle, mid-solve) driven by a single reducer over
//!   intents from a UI collaborator and completion signals from an
//!   animation collaborator.
//!
//! Rendering, input hit-testing and animation timing live outside this
//! crate; the boundary is the [`Intent`] enum inbound and the [`GameState`]
//! value outbound.
//!
//! # Example
//!
//! ```
//! use fifteen::{Intent, Session, SessionConfig};
//!
//! # fn main() -> Result<(), fifteen::BoardError> {
//! let mut session = Session::new(SessionConfig::default());
//! let state = session.handle(Intent::Shuffle)?;
//! assert!(!state.pending_swaps().is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod session;

// Crate-level exports - board algebra
pub use board::{
    BLANK, Board, BoardError, CELL_COUNT, GRID_SIZE, Swap, adjacent_to, apply_move, apply_moves,
    col_of, moves_for, row_of, shuffle,
};

// Crate-level exports - session state machine
pub use session::{DEFAULT_SHUFFLE_STEPS, GameState, Intent, Phase, Session, SessionConfig, step};
