//! Round-by-round game state
//!
//! ```text
//! AwaitingGuess --propose--> AwaitingFeedback --resolve--> Won
//!       ^                           |
//!       +-------- not won ----------+--> Lost (after round 12)
//! ```

use super::GameError;
use crate::core::{Code, Feedback};
use log::info;

/// Attempts allowed per game
pub const MAX_ROUNDS: usize = 12;

/// Where a game stands between calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    AwaitingFeedback(Code),
    Won,
    Lost,
}

/// One scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub number: usize,
    pub guess: Code,
    pub feedback: Feedback,
}

/// A single game against a fixed secret
#[derive(Debug, Clone)]
pub struct Game {
    secret: Code,
    max_rounds: usize,
    rounds: Vec<Round>,
    state: GameState,
}

impl Game {
    /// Start a game with the standard 12 rounds
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self::with_max_rounds(secret, MAX_ROUNDS)
    }

    /// Start a game with a custom round limit
    ///
    /// A limit of zero is treated as one. Rounds are stored as they are
    /// played, so the limit can be arbitrarily large.
    #[must_use]
    pub fn with_max_rounds(secret: Code, max_rounds: usize) -> Self {
        Self {
            secret,
            max_rounds: max_rounds.max(1),
            rounds: Vec::with_capacity(max_rounds.clamp(1, MAX_ROUNDS)),
            state: GameState::AwaitingGuess,
        }
    }

    /// Put a guess on the table
    ///
    /// # Errors
    /// `GameOver` once won or lost, `FeedbackPending` if the last guess is unscored.
    pub fn propose(&mut self, guess: Code) -> Result<(), GameError> {
        match self.state {
            GameState::AwaitingGuess => {
                self.state = GameState::AwaitingFeedback(guess);
                Ok(())
            }
            GameState::AwaitingFeedback(_) => Err(GameError::FeedbackPending),
            GameState::Won | GameState::Lost => Err(GameError::GameOver),
        }
    }

    /// Score the pending guess against the secret and advance the round
    ///
    /// # Errors
    /// `GameOver` once won or lost, `NoGuessPending` if nothing was proposed.
    pub fn resolve(&mut self) -> Result<Feedback, GameError> {
        let guess = match self.state {
            GameState::AwaitingFeedback(guess) => guess,
            GameState::AwaitingGuess => return Err(GameError::NoGuessPending),
            GameState::Won | GameState::Lost => return Err(GameError::GameOver),
        };

        let feedback = Feedback::evaluate(&guess, &self.secret);
        self.rounds.push(Round {
            number: self.rounds.len() + 1,
            guess,
            feedback,
        });

        self.state = if feedback.is_win() {
            info!("code {} found in round {}", self.secret, self.rounds.len());
            GameState::Won
        } else if self.rounds.len() >= self.max_rounds {
            info!("code {} not found in {} rounds", self.secret, self.max_rounds);
            GameState::Lost
        } else {
            GameState::AwaitingGuess
        };

        Ok(feedback)
    }

    /// Propose and resolve in one step
    ///
    /// # Errors
    /// Same as `propose` and `resolve`.
    pub fn submit(&mut self, guess: Code) -> Result<Feedback, GameError> {
        self.propose(guess)?;
        self.resolve()
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of the round currently being played (1-based)
    #[must_use]
    pub fn current_round(&self) -> usize {
        (self.rounds.len() + 1).min(self.max_rounds)
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::Won | GameState::Lost)
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }
}
