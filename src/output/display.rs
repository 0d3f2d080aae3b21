//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs, format_code};
use crate::commands::{BenchmarkResult, SolveResult, TestAllStatistics};
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", format_code(&result.secret).bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {} {}",
            i + 1,
            format_code(&step.guess),
            feedback_pegs(step.feedback),
            step.feedback
        );
        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.rounds())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} rounds", result.rounds())
                .red()
                .bold()
        );
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", percentage(stats.solved, stats.total_secrets)).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!("({:.1}%)", percentage(stats.failed, stats.total_secrets)).red()
        );
    }
    if stats.errors > 0 {
        println!(
            "  Solver errors:        {}",
            stats.errors.to_string().red().bold()
        );
    }
    println!(
        "  Average rounds:       {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "  Best / worst:         {} / {}",
        stats.min_rounds, stats.max_rounds
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if let Some((code, duration)) = &stats.slowest_secret {
        println!(
            "  Slowest game:         {} ({:.2}ms)",
            format_code(code),
            duration.as_secs_f64() * 1000.0
        );
    }

    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    print_distribution(&stats.round_distribution, stats.solved);

    if !stats.hardest_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (code, rounds) in &stats.hardest_secrets {
            println!("  {} ({rounds} rounds)", format_code(code));
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Wins:             {}",
        format!("{}", result.wins).green()
    );
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.total_games);
}

fn print_distribution(distribution: &FxHashMap<usize, usize>, total: usize) {
    let mut rounds: Vec<_> = distribution.iter().map(|(&r, &c)| (r, c)).collect();
    rounds.sort_unstable();
    let max_count = rounds.iter().map(|&(_, c)| c).max().unwrap_or(0);

    for (round, count) in rounds {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {round:2} rounds: {} {count:4} ({:5.1}%)",
            bar.green(),
            percentage(count, total)
        );
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
