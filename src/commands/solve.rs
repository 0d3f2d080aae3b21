//! Code solving command
//!
//! Lets the solver play a full game against a known secret and records each step.

use crate::core::{Code, CodeError, Feedback};
use crate::game::{Game, GameError, MAX_ROUNDS};
use crate::solver::{Solver, SolverError, Strategy};
use std::fmt;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_rounds: MAX_ROUNDS,
        }
    }
}

/// Result of solving a code
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: Code,
}

impl SolveResult {
    /// Rounds played
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone, Copy)]
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Why a solver game could not finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    InvalidSecret(CodeError),
    Solver(SolverError),
    Game(GameError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSecret(e) => write!(f, "Invalid secret code: {e}"),
            Self::Solver(e) => write!(f, "Solver failed: {e}"),
            Self::Game(e) => write!(f, "Game error: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSecret(e) => Some(e),
            Self::Solver(e) => Some(e),
            Self::Game(e) => Some(e),
        }
    }
}

impl From<CodeError> for SolveError {
    fn from(e: CodeError) -> Self {
        Self::InvalidSecret(e)
    }
}

impl From<SolverError> for SolveError {
    fn from(e: SolverError) -> Self {
        Self::Solver(e)
    }
}

impl From<GameError> for SolveError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

/// Parse the configured secret and solve it
///
/// # Errors
///
/// Returns an error if the secret is not four distinct palette colours, or if
/// the solver runs out of candidates.
pub fn solve_secret<S: Strategy>(
    config: &SolveConfig,
    solver: &mut Solver<S>,
) -> Result<SolveResult, SolveError> {
    let secret = Code::parse(&config.secret)?;
    solve_code(secret, solver, config.max_rounds)
}

/// Play one solver-driven game against `secret`
///
/// The solver guesses, the game scores the guess, and unless it won the
/// feedback is fed back to the solver for elimination.
///
/// # Errors
///
/// Returns `SolveError::Solver` if elimination empties the candidate set.
pub fn solve_code<S: Strategy>(
    secret: Code,
    solver: &mut Solver<S>,
    max_rounds: usize,
) -> Result<SolveResult, SolveError> {
    solve_code_with(secret, solver, max_rounds, |_| {})
}

/// Like [`solve_code`], calling `on_step` as soon as each round is scored
///
/// # Errors
///
/// Returns `SolveError::Solver` if elimination empties the candidate set.
pub fn solve_code_with<S, F>(
    secret: Code,
    solver: &mut Solver<S>,
    max_rounds: usize,
    mut on_step: F,
) -> Result<SolveResult, SolveError>
where
    S: Strategy,
    F: FnMut(&GuessStep),
{
    let mut game = Game::with_max_rounds(secret, max_rounds);
    let mut steps = Vec::new();

    while !game.is_over() {
        let candidates_before = solver.remaining();
        let guess = solver.choose_guess()?;
        let feedback = game.submit(guess)?;

        let candidates_after = if feedback.is_win() {
            1
        } else {
            solver.eliminate(feedback)?
        };

        let step = GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        };
        on_step(&step);
        steps.push(step);
    }

    Ok(SolveResult {
        success: game.is_won(),
        steps,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstCandidateStrategy, RandomStrategy};

    #[test]
    fn solve_secret_succeeds() {
        let mut solver = Solver::new(RandomStrategy::seeded(11));
        let config = SolveConfig::new("red yellow orange green".to_string());

        let result = solve_secret(&config, &mut solver).unwrap();

        assert!(result.success);
        assert!(result.rounds() <= MAX_ROUNDS);
        assert_eq!(result.steps.last().unwrap().guess, result.secret);
        assert!(result.steps.last().unwrap().feedback.is_win());
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let mut solver = Solver::new(RandomStrategy::seeded(2));
        let secret: Code = "purple blue green orange".parse().unwrap();

        let result = solve_code(secret, &mut solver, MAX_ROUNDS).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after < step.candidates_before || step.feedback.is_win());
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let mut solver = Solver::new(FirstCandidateStrategy);
        let config = SolveConfig::new("red red blue green".to_string());

        let result = solve_secret(&config, &mut solver);
        assert!(matches!(result, Err(SolveError::InvalidSecret(_))));
    }

    #[test]
    fn solve_first_candidate_wins_immediately() {
        let mut solver = Solver::new(FirstCandidateStrategy);
        let secret: Code = "red yellow orange green".parse().unwrap();

        let result = solve_code(secret, &mut solver, MAX_ROUNDS).unwrap();
        assert!(result.success);
        assert_eq!(result.rounds(), 1);
    }

    #[test]
    fn solve_respects_round_limit() {
        let mut solver = Solver::new(FirstCandidateStrategy);
        let secret: Code = "purple blue green orange".parse().unwrap();

        let result = solve_code(secret, &mut solver, 1).unwrap();
        assert!(!result.success);
        assert_eq!(result.rounds(), 1);
    }

    #[test]
    fn solve_with_unbounded_round_limit() {
        let mut solver = Solver::new(FirstCandidateStrategy);
        let mut config = SolveConfig::new("purple blue green orange".to_string());
        config.max_rounds = usize::MAX;

        let result = solve_secret(&config, &mut solver).unwrap();
        assert!(result.success);
        assert!(result.rounds() <= MAX_ROUNDS);
    }

    #[test]
    fn solve_reports_each_step_as_played() {
        let mut solver = Solver::new(RandomStrategy::seeded(8));
        let secret: Code = "green purple yellow blue".parse().unwrap();

        let mut seen = Vec::new();
        let result =
            solve_code_with(secret, &mut solver, MAX_ROUNDS, |step| seen.push(step.guess)).unwrap();

        let played: Vec<Code> = result.steps.iter().map(|s| s.guess).collect();
        assert_eq!(seen, played);
    }

    #[test]
    fn solve_reports_exhausted_candidates() {
        // Secret outside the solver's candidate set can never be consistent
        let secret: Code = "purple blue green orange".parse().unwrap();
        let candidates = vec!["red yellow orange green".parse().unwrap()];
        let mut solver = Solver::with_candidates(FirstCandidateStrategy, candidates);

        let result = solve_code(secret, &mut solver, MAX_ROUNDS);
        assert!(matches!(
            result,
            Err(SolveError::Solver(SolverError::ExhaustedCandidates { .. }))
        ));
    }
}
