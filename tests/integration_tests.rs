// Integration tests for the mastermind solver
// These drive full games through the public API

use mastermind_solver::commands::{
    Console, PlayMode, SolveConfig, run_session, run_test_all, solve_code, solve_secret,
};
use mastermind_solver::core::{Code, Feedback, UNIVERSE_SIZE, generate_all};
use mastermind_solver::game::{Game, GameState, MAX_ROUNDS};
use mastermind_solver::solver::{
    FirstCandidateStrategy, MinimaxStrategy, RandomStrategy, Solver, SolverError, Strategy,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

fn code(s: &str) -> Code {
    s.parse().unwrap()
}

/// Play a solver game by hand, checking the elimination invariant every round
fn play_checked<S: Strategy>(secret: Code, solver: &mut Solver<S>) -> usize {
    for round in 1..=MAX_ROUNDS {
        let guess = solver.choose_guess().unwrap();
        let feedback = Feedback::evaluate(&guess, &secret);
        if feedback.is_win() {
            return round;
        }

        solver.eliminate(feedback).unwrap();

        assert!(
            solver.candidates().contains(&secret),
            "secret {secret} eliminated after guessing {guess}"
        );
        assert!(!solver.candidates().contains(&guess));
        for candidate in solver.candidates() {
            assert_eq!(Feedback::evaluate(&guess, candidate), feedback);
        }
    }
    panic!("secret {secret} not found in {MAX_ROUNDS} rounds");
}

#[test]
fn test_random_solver_wins_against_every_secret() {
    for (i, secret) in generate_all().into_iter().enumerate() {
        let mut solver = Solver::new(RandomStrategy::seeded(i as u64));
        let rounds = play_checked(secret, &mut solver);
        assert!(rounds <= MAX_ROUNDS);
    }
}

#[test]
fn test_first_candidate_solver_wins_against_every_secret() {
    for secret in generate_all() {
        let mut solver = Solver::new(FirstCandidateStrategy);
        play_checked(secret, &mut solver);
    }
}

#[test]
fn test_minimax_solver_wins_sample() {
    for secret in generate_all().into_iter().step_by(36) {
        let mut solver = Solver::new(MinimaxStrategy);
        play_checked(secret, &mut solver);
    }
}

#[test]
fn test_parallel_test_all_matches_independent_games() {
    let secrets = generate_all();
    let stats = run_test_all(
        |i| RandomStrategy::seeded(1000 + i as u64),
        &secrets,
        MAX_ROUNDS,
        false,
    );

    assert_eq!(stats.total_secrets, UNIVERSE_SIZE);
    assert_eq!(stats.solved, UNIVERSE_SIZE);
    assert_eq!(stats.errors, 0);

    // Same seeds played sequentially give the same total
    let sequential: usize = secrets
        .iter()
        .enumerate()
        .map(|(i, &secret)| {
            let mut solver = Solver::new(RandomStrategy::seeded(1000 + i as u64));
            solve_code(secret, &mut solver, MAX_ROUNDS).unwrap().rounds()
        })
        .sum();
    let parallel: usize = stats
        .round_distribution
        .iter()
        .map(|(rounds, count)| rounds * count)
        .sum();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let secret = code("green blue purple red");
    let mut a = Solver::new(RandomStrategy::seeded(77));
    let mut b = Solver::new(RandomStrategy::seeded(77));

    let first = solve_code(secret, &mut a, MAX_ROUNDS).unwrap();
    let second = solve_code(secret, &mut b, MAX_ROUNDS).unwrap();

    let guesses_a: Vec<Code> = first.steps.iter().map(|s| s.guess).collect();
    let guesses_b: Vec<Code> = second.steps.iter().map(|s| s.guess).collect();
    assert_eq!(guesses_a, guesses_b);
}

#[test]
fn test_feedback_scenarios() {
    let secret = code("red yellow orange green");

    assert_eq!(
        Feedback::evaluate(&code("red orange yellow blue"), &secret),
        Feedback::new(1, 2).unwrap()
    );
    assert_eq!(
        Feedback::evaluate(&code("blue purple red yellow"), &secret),
        Feedback::new(0, 2).unwrap()
    );
    assert_eq!(Feedback::evaluate(&secret, &secret), Feedback::WIN);
}

#[test]
fn test_game_won_on_exact_guess() {
    let secret = code("red yellow orange green");
    let mut game = Game::new(secret);

    game.propose(secret).unwrap();
    assert_eq!(game.state(), GameState::AwaitingFeedback(secret));
    assert_eq!(game.resolve().unwrap(), Feedback::WIN);
    assert_eq!(game.state(), GameState::Won);
}

#[test]
fn test_two_candidate_elimination_scenario() {
    let abcd = code("blue purple red yellow");
    let abdc = code("blue purple yellow red");
    let mut solver = Solver::with_candidates(FirstCandidateStrategy, vec![abcd, abdc]);

    assert_eq!(solver.choose_guess().unwrap(), abcd);
    assert_eq!(solver.eliminate(Feedback::new(2, 2).unwrap()).unwrap(), 1);
    assert_eq!(solver.candidates(), &[abdc]);
    assert_eq!(solver.choose_guess().unwrap(), abdc);
}

#[test]
fn test_lying_feedback_surfaces_error() {
    let secret = code("red yellow orange green");
    let mut solver = Solver::new(FirstCandidateStrategy);

    // First guess is the secret itself, but claim nothing matched
    let guess = solver.choose_guess().unwrap();
    assert_eq!(guess, secret);
    let remaining = solver.eliminate(Feedback::new(0, 0).unwrap());

    // Every code shares at least two colours with every other
    assert!(matches!(
        remaining,
        Err(SolverError::ExhaustedCandidates { .. })
    ));
    assert_eq!(solver.choose_guess(), Err(SolverError::NoCandidates));
}

#[test]
fn test_solve_secret_from_text() {
    let mut solver = Solver::new(RandomStrategy::seeded(5));
    let config = SolveConfig::new("P, B, G, O".to_string());

    let result = solve_secret(&config, &mut solver).unwrap();
    assert!(result.success);
    assert_eq!(result.secret, code("purple blue green orange"));
}

#[test]
fn test_interactive_session_both_modes() {
    let mut rng = StdRng::seed_from_u64(12);
    let secret = Code::random(&mut StdRng::seed_from_u64(12));

    // Codebreaker with one bad line, then codemaker, then stop
    let input = format!(
        "codebreaker\nred red red red\n{secret}\nyes\ncodemaker\nr y o g\nno\n"
    );
    let mut console = Console::new(Cursor::new(input), Vec::new());

    let games = run_session(&mut console, None, || RandomStrategy::seeded(9), &mut rng).unwrap();
    assert_eq!(games, 2);

    let text = String::from_utf8(console.into_output()).unwrap();
    assert!(text.contains("Invalid input"));
    assert!(text.contains("You cracked the code in 1 guess."));
    assert!(text.contains("The computer found your code"));
}

#[test]
fn test_interactive_session_ends_on_eof() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut console = Console::new(Cursor::new("codemaker\n".to_string()), Vec::new());

    let games = run_session(
        &mut console,
        Some(PlayMode::Codemaker),
        || FirstCandidateStrategy,
        &mut rng,
    )
    .unwrap();
    assert_eq!(games, 0);
}
