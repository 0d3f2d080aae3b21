//! Main Mastermind solver
//!
//! Holds the shrinking candidate set for one game. Each round the solver
//! issues a guess, then drops every code that would not have produced the
//! feedback actually received. The secret always scores its own feedback, so
//! it is never removed.

use super::SolverError;
use super::strategy::Strategy;
use crate::core::{Code, Feedback, generate_all};
use log::{debug, warn};

/// Constraint-elimination code breaker
///
/// Owns its candidate set outright; one instance per game.
pub struct Solver<S: Strategy> {
    strategy: S,
    candidates: Vec<Code>,
    last_guess: Option<Code>,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver over all 360 codes
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self::with_candidates(strategy, generate_all())
    }

    /// Create a solver over an explicit candidate set
    #[must_use]
    pub const fn with_candidates(strategy: S, candidates: Vec<Code>) -> Self {
        Self {
            strategy,
            candidates,
            last_guess: None,
        }
    }

    /// Pick the next guess from the remaining candidates
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if the candidate set is empty.
    pub fn choose_guess(&mut self) -> Result<Code, SolverError> {
        let guess = self
            .strategy
            .select_guess(&self.candidates)
            .ok_or(SolverError::NoCandidates)?;

        debug!("guessing {guess} from {} candidates", self.candidates.len());
        self.last_guess = Some(guess);
        Ok(guess)
    }

    /// Apply feedback for the last guess
    ///
    /// Removes the guess itself, then every candidate `c` for which
    /// `evaluate(guess, c) != feedback`. Returns the number of codes left.
    ///
    /// A winning `(4, 0)` ends the game and should not be passed here.
    ///
    /// # Errors
    /// - `SolverError::NoGuessPending` if no guess was issued since the last call
    /// - `SolverError::ExhaustedCandidates` if nothing survives, which means the
    ///   feedback contradicts earlier rounds
    pub fn eliminate(&mut self, feedback: Feedback) -> Result<usize, SolverError> {
        let guess = self.last_guess.take().ok_or(SolverError::NoGuessPending)?;
        let before = self.candidates.len();

        self.candidates
            .retain(|candidate| *candidate != guess && Feedback::evaluate(&guess, candidate) == feedback);

        let remaining = self.candidates.len();
        debug!(
            "{guess} scored {feedback}: eliminated {} of {before}, {remaining} remain",
            before - remaining
        );

        if remaining == 0 {
            warn!("no candidates consistent with {feedback} for {guess}");
            return Err(SolverError::ExhaustedCandidates { guess, feedback });
        }

        Ok(remaining)
    }

    /// Codes still consistent with all feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Count of remaining candidates
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Guess awaiting feedback, if any
    #[must_use]
    pub const fn last_guess(&self) -> Option<Code> {
        self.last_guess
    }
}
