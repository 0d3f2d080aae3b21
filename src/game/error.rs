//! Game error type

use std::fmt;

/// Calls that do not fit the current round state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game is already won or lost
    GameOver,
    /// A guess was proposed while another still awaits feedback
    FeedbackPending,
    /// Feedback was requested with no guess on the table
    NoGuessPending,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over"),
            Self::FeedbackPending => write!(f, "The previous guess has not been scored yet"),
            Self::NoGuessPending => write!(f, "There is no guess to score"),
        }
    }
}

impl std::error::Error for GameError {}
