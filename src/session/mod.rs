//! Session state machine wrapping the board algebra.

mod config;
mod machine;
mod state;

pub use config::{DEFAULT_SHUFFLE_STEPS, SessionConfig};
pub use machine::{Intent, Session, step};
pub use state::{GameState, Phase};
