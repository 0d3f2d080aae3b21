//! Solver error type

use crate::core::{Code, Feedback};
use std::fmt;

/// Failures the solver surfaces instead of guessing blindly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// `eliminate` was called before any guess was issued
    NoGuessPending,
    /// The candidate set is empty, so no guess can be made
    NoCandidates,
    /// Feedback ruled out every remaining candidate
    ExhaustedCandidates { guess: Code, feedback: Feedback },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGuessPending => write!(f, "No guess is awaiting feedback"),
            Self::NoCandidates => write!(f, "No candidate codes remain"),
            Self::ExhaustedCandidates { guess, feedback } => write!(
                f,
                "Feedback {feedback} for guess '{guess}' is inconsistent with every remaining code"
            ),
        }
    }
}

impl std::error::Error for SolverError {}
