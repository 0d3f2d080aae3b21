//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that value,
/// or `None` if the guess pool is empty. Ties go to the earliest code in the pool.
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, *guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|&(index, _, max)| (max, index))
        .map(|(_, guess, max)| (guess, max))
}
