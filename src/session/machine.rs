//! The session state machine.
//!
//! All intents flow through a single reducer, [`step`], which maps the
//! current [`GameState`] and one [`Intent`] to the next state. Board
//! mutation happens eagerly at transition entry; the transient states only
//! gate input until the animation collaborator reports completion.

use crate::board::{Board, BoardError, apply_moves, moves_for, shuffle};
use crate::session::config::SessionConfig;
use crate::session::state::GameState;
use derive_getters::Getters;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A command from the UI collaborator or a completion signal from the
/// animation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// The user clicked the cell at this board index.
    Move(usize),
    /// The user requested a shuffle.
    Shuffle,
    /// The user requested an auto-solve.
    Solve,
    /// The animation for the current transient state finished.
    AnimationDone,
}

/// Computes the next session state for one intent.
///
/// Pure apart from the RNG: intents that do not apply to the current phase
/// return the state unchanged. While a transient phase is active, move,
/// shuffle and solve intents are ignored, so at most one transition is in
/// flight at a time.
///
/// # Errors
///
/// Propagates [`BoardError::InvalidBoard`], which signals a corrupted
/// board. That is a logic bug, not a recoverable condition; callers should
/// abort rather than continue.
pub fn step<R: Rng>(
    state: GameState,
    intent: Intent,
    config: &SessionConfig,
    rng: &mut R,
) -> Result<GameState, BoardError> {
    match (state, intent) {
        (
            GameState::NotSolved {
                board,
                swappables,
                mut history,
                move_count,
            },
            Intent::Move(target),
        ) => {
            let swaps = moves_for(&board, target)?;
            if swaps.is_empty() {
                debug!(cell = target, "move request ignored: not a row or column mate of the blank");
                return Ok(GameState::NotSolved {
                    board,
                    swappables,
                    history,
                    move_count,
                });
            }
            let board = apply_moves(&board, &swaps);
            history.extend_from_slice(&swaps);
            debug!(cell = target, chain_len = swaps.len(), "move accepted");
            Ok(GameState::Swapping {
                board,
                swaps,
                history,
                move_count: move_count + 1,
            })
        }

        (
            GameState::NotSolved { board, .. } | GameState::Solved { board, .. },
            Intent::Shuffle,
        ) => {
            let steps = *config.shuffle_steps();
            let (board, shuffles) = shuffle(&board, steps, rng)?;
            info!(steps, "shuffle started");
            Ok(GameState::Shuffling {
                board,
                history: shuffles.clone(),
                shuffles,
            })
        }

        (GameState::NotSolved { board, history, .. }, Intent::Solve) => {
            let solution: Vec<_> = history.iter().rev().copied().collect();
            let board = apply_moves(&board, &solution);
            info!(solution_len = solution.len(), "auto-solve started");
            Ok(GameState::Solving { board, solution })
        }

        (
            GameState::Swapping {
                board,
                history,
                move_count,
                ..
            },
            Intent::AnimationDone,
        ) => {
            if board.is_solved() {
                info!(move_count, "puzzle solved by the player");
                Ok(GameState::Solved {
                    board,
                    move_count: Some(move_count),
                })
            } else {
                Ok(GameState::NotSolved {
                    swappables: board.swappables()?,
                    board,
                    history,
                    move_count,
                })
            }
        }

        (GameState::Shuffling { board, history, .. }, Intent::AnimationDone) => {
            if board.is_solved() {
                // Rare anomaly: a shuffle may land back on the solved
                // arrangement. Accepted as-is, no automatic re-shuffle.
                info!("shuffle landed on the solved board");
                Ok(GameState::Solved {
                    board,
                    move_count: None,
                })
            } else {
                Ok(GameState::NotSolved {
                    swappables: board.swappables()?,
                    board,
                    history,
                    move_count: 0,
                })
            }
        }

        (GameState::Solving { board, .. }, Intent::AnimationDone) => {
            if !board.is_solved() {
                // The history baseline was not the solved board, which
                // happens when a shuffle started from a half-played game.
                warn!("auto-solve replay ended off the canonical board, snapping to it");
            }
            // A finished solve always lands on the canonical board.
            Ok(GameState::Solved {
                board: Board::solved(),
                move_count: None,
            })
        }

        (state, intent) => {
            debug!(?intent, phase = %state.phase(), "intent ignored in this phase");
            Ok(state)
        }
    }
}

/// Owns the current session state and feeds intents through the reducer
/// one at a time.
#[derive(Debug, Getters)]
pub struct Session<R = StdRng> {
    /// Current session state.
    state: GameState,
    /// Session configuration.
    config: SessionConfig,
    #[getter(skip)]
    rng: R,
}

impl Session<StdRng> {
    /// Creates a session with an entropy-seeded RNG, starting on the
    /// canonical solved board.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    /// Creates a session with the given RNG, for deterministic shuffles.
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        Self {
            state: GameState::initial(),
            config,
            rng,
        }
    }

    /// Processes one intent and returns the new current state.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError`] from the reducer; the state is left
    /// unchanged in that case, but the board is corrupted and the session
    /// should be abandoned.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn handle(&mut self, intent: Intent) -> Result<&GameState, BoardError> {
        let next = step(self.state.clone(), intent, &self.config, &mut self.rng)?;
        self.state = next;
        Ok(&self.state)
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
