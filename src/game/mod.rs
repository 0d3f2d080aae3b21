//! Game orchestration
//!
//! Tracks rounds against a secret. Used directly when a person guesses, and
//! driven by the solver when the computer guesses.

mod error;
mod state;

pub use error::GameError;
pub use state::{Game, GameState, MAX_ROUNDS, Round};
