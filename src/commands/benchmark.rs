//! Benchmark command
//!
//! Tests solver performance across a reproducible sample of random secrets.

use super::solve::{SolveError, solve_code};
use crate::core::Code;
use crate::solver::{Solver, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` secrets from a seeded generator
#[must_use]
pub fn sample_secrets(count: usize, seed: u64) -> Vec<Code> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| Code::random(&mut rng)).collect()
}

/// Run a fresh solver against each secret
///
/// # Errors
///
/// Returns the first `SolveError` hit, which means the solver lost track of
/// the secret.
pub fn run_benchmark<S, F>(
    make_strategy: F,
    secrets: &[Code],
    max_rounds: usize,
) -> Result<BenchmarkResult, SolveError>
where
    S: Strategy,
    F: Fn(usize) -> S,
{
    let start = Instant::now();
    let mut total_rounds = 0;
    let mut wins = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds_seen = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for (index, &secret) in secrets.iter().enumerate() {
        let mut solver = Solver::new(make_strategy(index));
        let result = solve_code(secret, &mut solver, max_rounds)?;
        let rounds = result.rounds();

        if result.success {
            wins += 1;
        }
        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        max_rounds_seen = max_rounds_seen.max(rounds);
        *distribution.entry(rounds).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    Ok(BenchmarkResult {
        total_games,
        wins,
        total_rounds,
        average_rounds: if total_games == 0 {
            0.0
        } else {
            total_rounds as f64 / total_games as f64
        },
        min_rounds: if total_games == 0 { 0 } else { min_rounds },
        max_rounds: max_rounds_seen,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
