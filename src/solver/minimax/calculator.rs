//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
/// A winning response leaves nothing to search, so it is not counted.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, generate_all};
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let all = generate_all();
/// let max_remaining = calculate_max_remaining(&all[0], &all);
/// assert!(max_remaining < all.len());
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    group_by_feedback(guess, candidates)
        .into_iter()
        .filter(|(feedback, _)| !feedback.is_win())
        .map(|(_, count)| count)
        .max()
        .unwrap_or(0)
}

/// Group candidates by the feedback they produce with the guess
fn group_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::evaluate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
