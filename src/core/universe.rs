//! Candidate universe
//!
//! Every valid code: ordered picks of 4 distinct colours from the 6-colour
//! palette, 6 × 5 × 4 × 3 = 360 in total.

use super::{CODE_LENGTH, Code, Colour};
use itertools::Itertools;

/// Number of distinct valid codes
pub const UNIVERSE_SIZE: usize = 360;

/// Generate all valid codes
///
/// Enumeration is lexicographic in palette order, so the first code is
/// `red yellow orange green` and the last is `purple blue green orange`.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{UNIVERSE_SIZE, generate_all};
///
/// let all = generate_all();
/// assert_eq!(all.len(), UNIVERSE_SIZE);
/// ```
#[must_use]
pub fn generate_all() -> Vec<Code> {
    Colour::ALL
        .into_iter()
        .permutations(CODE_LENGTH)
        .map(|p| Code::from_distinct([p[0], p[1], p[2], p[3]]))
        .collect()
}
