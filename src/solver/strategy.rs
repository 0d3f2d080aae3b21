//! Guess selection strategies
//!
//! Any remaining candidate is consistent with all feedback so far, so the
//! choice only affects how fast the game ends, never correctness.

use crate::core::Code;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A policy for picking the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess(&mut self, candidates: &[Code]) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Uniform random choice (default)
    Random(RandomStrategy),
    /// First remaining candidate in enumeration order
    First(FirstCandidateStrategy),
    /// Smallest worst-case partition
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&mut self, candidates: &[Code]) -> Option<Code> {
        match self {
            Self::Random(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
            Self::Minimax(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "first", "minimax".
    /// Defaults to random if name is unrecognized. `seed` only affects the
    /// random strategy; `None` seeds from the operating system.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "first" => Self::First(FirstCandidateStrategy),
            "minimax" => Self::Minimax(MinimaxStrategy),
            _ => Self::Random(seed.map_or_else(RandomStrategy::from_os_rng, RandomStrategy::seeded)),
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::First(_) => "first",
            Self::Minimax(_) => "minimax",
        }
    }
}

/// Random strategy
///
/// Picks uniformly from the remaining candidates. The generator is injected
/// so a fixed seed replays the same game.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Use an explicit generator
    #[must_use]
    pub const fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Deterministic generator from a seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl Strategy for RandomStrategy {
    fn select_guess(&mut self, candidates: &[Code]) -> Option<Code> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Always guesses the first remaining candidate
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess(&mut self, candidates: &[Code]) -> Option<Code> {
        candidates.first().copied()
    }
}

/// Minimax strategy
///
/// Guesses the candidate that minimizes the worst-case number of codes left.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(&mut self, candidates: &[Code]) -> Option<Code> {
        super::minimax::select_best_guess(candidates, candidates).map(|(best, _)| best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate_all;

    #[test]
    fn random_strategy_selects_from_candidates() {
        let candidates = generate_all();
        let mut strategy = RandomStrategy::seeded(3);
        for _ in 0..50 {
            let guess = strategy.select_guess(&candidates).unwrap();
            assert!(candidates.contains(&guess));
        }
    }

    #[test]
    fn random_strategy_is_reproducible() {
        let candidates = generate_all();
        let mut a = RandomStrategy::seeded(99);
        let mut b = RandomStrategy::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.select_guess(&candidates), b.select_guess(&candidates));
        }
    }

    #[test]
    fn strategies_return_none_when_empty() {
        assert!(RandomStrategy::seeded(0).select_guess(&[]).is_none());
        assert!(FirstCandidateStrategy.select_guess(&[]).is_none());
        assert!(MinimaxStrategy.select_guess(&[]).is_none());
    }

    #[test]
    fn first_strategy_picks_first() {
        let candidates = generate_all();
        assert_eq!(
            FirstCandidateStrategy.select_guess(&candidates[5..]),
            Some(candidates[5])
        );
    }

    #[test]
    fn minimax_strategy_selects_candidate() {
        let candidates: Vec<Code> = generate_all().into_iter().take(24).collect();
        let guess = MinimaxStrategy.select_guess(&candidates).unwrap();
        assert!(candidates.contains(&guess));
    }

    #[test]
    fn from_name_mapping() {
        assert_eq!(StrategyType::from_name("first", None).name(), "first");
        assert_eq!(StrategyType::from_name("minimax", None).name(), "minimax");
        assert_eq!(StrategyType::from_name("random", Some(1)).name(), "random");
        assert_eq!(StrategyType::from_name("unknown", Some(1)).name(), "random");
    }
}
