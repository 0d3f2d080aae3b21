//! Test all secrets - comprehensive solver evaluation
//!
//! Runs an independent solver against every possible secret and gathers statistics.

use super::solve::{SolveError, solve_code};
use crate::core::Code;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from a single simulated game
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Code,
    pub rounds: usize,
    pub success: bool,
    pub error: Option<SolveError>,
    pub duration: Duration,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub errors: usize,
    pub round_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: usize,
    pub min_rounds: usize,
    pub hardest_secrets: Vec<(Code, usize)>,
    pub slowest_secret: Option<(Code, Duration)>,
}

/// Run one solver per secret, in parallel
///
/// `make_strategy` receives the index of the secret so callers can derive a
/// distinct seed per game. No state is shared between games.
pub fn run_test_all<S, F>(
    make_strategy: F,
    secrets: &[Code],
    max_rounds: usize,
    show_progress: bool,
) -> TestAllStatistics
where
    S: Strategy,
    F: Fn(usize) -> S + Sync,
{
    info!("testing {} secrets", secrets.len());

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(progress_style());

    let total_start = Instant::now();

    let results: Vec<SecretTestResult> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, &secret)| {
            let start = Instant::now();
            let mut solver = Solver::new(make_strategy(index));
            let result = match solve_code(secret, &mut solver, max_rounds) {
                Ok(solved) => SecretTestResult {
                    secret,
                    rounds: solved.rounds(),
                    success: solved.success,
                    error: None,
                    duration: start.elapsed(),
                },
                Err(e) => {
                    warn!("solver failed on {secret}: {e}");
                    SecretTestResult {
                        secret,
                        rounds: 0,
                        success: false,
                        error: Some(e),
                        duration: start.elapsed(),
                    }
                }
            };
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░")
}

fn summarize(results: &[SecretTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();
    let errors = results.iter().filter(|r| r.error.is_some()).count();

    let mut round_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for r in &solved {
        *round_distribution.entry(r.rounds).or_insert(0) += 1;
    }

    let total_rounds: usize = solved.iter().map(|r| r.rounds).sum();
    let average_rounds = if solved.is_empty() {
        0.0
    } else {
        total_rounds as f64 / solved.len() as f64
    };

    let mut hardest_secrets: Vec<(Code, usize)> =
        solved.iter().map(|r| (r.secret, r.rounds)).collect();
    hardest_secrets.sort_by_key(|&(code, rounds)| (std::cmp::Reverse(rounds), code));
    hardest_secrets.truncate(5);

    let slowest_secret = results
        .iter()
        .max_by_key(|r| r.duration)
        .map(|r| (r.secret, r.duration));

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        errors,
        round_distribution,
        total_time,
        average_rounds,
        max_rounds: solved.iter().map(|r| r.rounds).max().unwrap_or(0),
        min_rounds: solved.iter().map(|r| r.rounds).min().unwrap_or(0),
        hardest_secrets,
        slowest_secret,
    }
}
