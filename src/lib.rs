//! Mastermind Solver
//!
//! Mastermind with four pegs, six colours and no repeats, plus a code
//! breaker that narrows 360 candidate codes by constraint elimination.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Feedback};
//! use mastermind_solver::solver::{RandomStrategy, Solver};
//!
//! let secret: Code = "red yellow orange green".parse().unwrap();
//! let mut solver = Solver::new(RandomStrategy::seeded(7));
//!
//! loop {
//!     let guess = solver.choose_guess().unwrap();
//!     let feedback = Feedback::evaluate(&guess, &secret);
//!     if feedback.is_win() {
//!         break;
//!     }
//!     solver.eliminate(feedback).unwrap();
//! }
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Round state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
