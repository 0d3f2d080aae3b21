//! Mastermind Solver - CLI
//!
//! Play Mastermind as codebreaker or codemaker, or exercise the solver.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use mastermind_solver::{
    commands::{
        Console, PlayMode, SolveConfig, run_benchmark, run_session, run_test_all, sample_secrets,
        solve_secret,
    },
    core::{UNIVERSE_SIZE, generate_all},
    game::MAX_ROUNDS,
    logging,
    output::{print_benchmark_result, print_solve_result, print_test_all_statistics},
    solver::{Solver, StrategyType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind with a constraint-elimination code breaker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: random (default), first, minimax
    #[arg(short, long, global = true, default_value = "random")]
    strategy: String,

    /// Seed for reproducible games (random secrets and random strategy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Skip the mode prompt
        #[arg(value_enum)]
        mode: Option<PlayMode>,
    },

    /// Let the solver break a given code
    Solve {
        /// The secret, e.g. "red yellow orange green"
        code: String,

        /// Round limit (1-360)
        #[arg(short = 'r', long, default_value_t = MAX_ROUNDS, value_parser = parse_round_limit)]
        max_rounds: usize,
    },

    /// Run the solver against all 360 possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Benchmark the solver on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play { mode: None });

    match command {
        Commands::Play { mode } => run_play_command(&cli.strategy, cli.seed, mode),
        Commands::Solve { code, max_rounds } => {
            run_solve_command(&cli.strategy, cli.seed, code, max_rounds)
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&cli.strategy, cli.seed, limit);
            Ok(())
        }
        Commands::Benchmark { count } => run_benchmark_command(&cli.strategy, cli.seed, count),
    }
}

/// No game needs more rounds than there are codes
fn parse_round_limit(s: &str) -> Result<usize, String> {
    let rounds: usize = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (1..=UNIVERSE_SIZE).contains(&rounds) {
        Ok(rounds)
    } else {
        Err(format!("round limit must be between 1 and {UNIVERSE_SIZE}"))
    }
}

/// Name of the strategy `--strategy` resolves to
fn strategy_label(strategy_name: &str) -> &'static str {
    StrategyType::from_name(strategy_name, Some(0)).name()
}

/// Seed for the `index`-th independent game
fn game_seed(seed: Option<u64>, index: usize) -> Option<u64> {
    seed.map(|s| s.wrapping_add(index as u64))
}

fn run_play_command(strategy_name: &str, seed: Option<u64>, mode: Option<PlayMode>) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let mut games = 0;
    run_session(
        &mut console,
        mode,
        || {
            games += 1;
            StrategyType::from_name(strategy_name, game_seed(seed, games))
        },
        &mut rng,
    )
    .context("interactive session failed")?;
    Ok(())
}

fn run_solve_command(
    strategy_name: &str,
    seed: Option<u64>,
    code: String,
    max_rounds: usize,
) -> Result<()> {
    let mut solver = Solver::new(StrategyType::from_name(strategy_name, seed));
    let mut config = SolveConfig::new(code);
    config.max_rounds = max_rounds;

    let result = solve_secret(&config, &mut solver)?;
    print_solve_result(&result);
    Ok(())
}

fn run_test_all_command(strategy_name: &str, seed: Option<u64>, limit: Option<usize>) {
    let mut secrets = generate_all();
    if let Some(limit) = limit {
        secrets.truncate(limit);
    }

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} possible secrets", secrets.len());
    println!("Strategy: {}\n", strategy_label(strategy_name));

    let stats = run_test_all(
        |index| StrategyType::from_name(strategy_name, game_seed(seed, index)),
        &secrets,
        MAX_ROUNDS,
        true,
    );
    print_test_all_statistics(&stats);
}

fn run_benchmark_command(strategy_name: &str, seed: Option<u64>, count: usize) -> Result<()> {
    let sample_seed = seed.unwrap_or_else(rand::random);
    println!("Running benchmark on {count} random secrets (seed {sample_seed})...");

    let secrets = sample_secrets(count, sample_seed);
    let result = run_benchmark(
        |index| StrategyType::from_name(strategy_name, game_seed(seed, index)),
        &secrets,
        MAX_ROUNDS,
    )?;
    print_benchmark_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_limit_bounds() {
        assert_eq!(parse_round_limit("12"), Ok(12));
        assert_eq!(parse_round_limit("360"), Ok(360));
        assert!(parse_round_limit("0").is_err());
        assert!(parse_round_limit("361").is_err());
        assert!(parse_round_limit("18446744073709551615").is_err());
        assert!(parse_round_limit("many").is_err());
    }

    #[test]
    fn unknown_strategy_is_reported_as_random() {
        assert_eq!(strategy_label("minimax"), "minimax");
        assert_eq!(strategy_label("entropy"), "random");
    }

    #[test]
    fn solve_rejects_out_of_range_round_limit() {
        assert!(Cli::try_parse_from(["mastermind", "solve", "r y o g", "-r", "0"]).is_err());
        assert!(
            Cli::try_parse_from(["mastermind", "solve", "r y o g", "-r", "99999999999"]).is_err()
        );

        let cli = Cli::try_parse_from(["mastermind", "solve", "r y o g", "-r", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Solve { max_rounds: 3, .. })
        ));
    }
}
