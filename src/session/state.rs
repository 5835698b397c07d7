//! Session state: what the puzzle session is currently doing.
//!
//! Each state carries the current board plus phase-specific bookkeeping.
//! States are values, never mutated in place; the state machine replaces
//! the whole state on every event.

use crate::board::{Board, Swap};
use serde::{Deserialize, Serialize};

/// Phase tag of a [`GameState`], for logging and status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Board is in the canonical solved arrangement.
    Solved,
    /// Idle and playable.
    NotSolved,
    /// A user move is being animated.
    Swapping,
    /// A shuffle is being animated.
    Shuffling,
    /// An auto-solve is being animated.
    Solving,
}

/// The phase of a puzzle session together with its carried data.
///
/// The transient phases (`Swapping`, `Shuffling`, `Solving`) hold a board
/// that is already fully mutated; their swap chains exist only so the
/// animation collaborator can replay the transition visually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Board solved. `move_count` is present only when the player solved
    /// the puzzle by playing; a shuffle anomaly or an auto-solve leaves it
    /// absent.
    Solved {
        /// The solved board.
        board: Board,
        /// Accepted move requests it took the player, if known.
        move_count: Option<u32>,
    },
    /// Idle and accepting move requests.
    NotSolved {
        /// Current board.
        board: Board,
        /// Cells reachable by a single move request (blank's row and
        /// column mates).
        swappables: Vec<usize>,
        /// Primitive swaps applied since the board was last solved.
        history: Vec<Swap>,
        /// Accepted move requests so far.
        move_count: u32,
    },
    /// A move request was accepted; waiting for the animation to finish.
    Swapping {
        /// Board with the move already applied.
        board: Board,
        /// The accepted swap chain, for the animator.
        swaps: Vec<Swap>,
        /// History including the accepted chain.
        history: Vec<Swap>,
        /// Accepted move requests including this one.
        move_count: u32,
    },
    /// A shuffle was started; waiting for the animation to finish.
    Shuffling {
        /// Fully shuffled board.
        board: Board,
        /// The shuffle's swap sequence, for the animator.
        shuffles: Vec<Swap>,
        /// New history baseline (the shuffle sequence itself).
        history: Vec<Swap>,
    },
    /// An auto-solve was started; waiting for the animation to finish.
    Solving {
        /// Board with the solution already applied.
        board: Board,
        /// Reversed history, for the animator.
        solution: Vec<Swap>,
    },
}

impl GameState {
    /// The state a session starts in: solved canonical board, no move
    /// count (nothing has been played yet).
    pub fn initial() -> Self {
        Self::Solved {
            board: Board::solved(),
            move_count: None,
        }
    }

    /// Phase tag of this state.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Solved { .. } => Phase::Solved,
            Self::NotSolved { .. } => Phase::NotSolved,
            Self::Swapping { .. } => Phase::Swapping,
            Self::Shuffling { .. } => Phase::Shuffling,
            Self::Solving { .. } => Phase::Solving,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        match self {
            Self::Solved { board, .. }
            | Self::NotSolved { board, .. }
            | Self::Swapping { board, .. }
            | Self::Shuffling { board, .. }
            | Self::Solving { board, .. } => board,
        }
    }

    /// Accepted move requests so far; 0 when unknown or not applicable.
    pub fn move_count(&self) -> u32 {
        match self {
            Self::NotSolved { move_count, .. } | Self::Swapping { move_count, .. } => *move_count,
            Self::Solved { move_count, .. } => move_count.unwrap_or(0),
            Self::Shuffling { .. } | Self::Solving { .. } => 0,
        }
    }

    /// Primitive swaps applied since the board was last solved. Empty for
    /// `Solved` and `Solving`, where the history has been discarded.
    pub fn history(&self) -> &[Swap] {
        match self {
            Self::NotSolved { history, .. }
            | Self::Swapping { history, .. }
            | Self::Shuffling { history, .. } => history,
            Self::Solved { .. } | Self::Solving { .. } => &[],
        }
    }

    /// The swap chain the animation collaborator should replay for this
    /// state. Empty when no animation is needed.
    pub fn pending_swaps(&self) -> &[Swap] {
        match self {
            Self::Swapping { swaps, .. } => swaps,
            Self::Shuffling { shuffles, .. } => shuffles,
            Self::Solving { solution, .. } => solution,
            Self::Solved { .. } | Self::NotSolved { .. } => &[],
        }
    }

    /// The status text a UI shows for this state.
    pub fn status_label(&self) -> String {
        match self {
            Self::Solved {
                move_count: None, ..
            } => "shuffle to start".to_string(),
            Self::Shuffling { .. } => "shuffling...".to_string(),
            Self::Solving { .. } => "solving...".to_string(),
            state => {
                let count = state.move_count();
                format!("{} move{}", count, if count == 1 { "" } else { "s" })
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
