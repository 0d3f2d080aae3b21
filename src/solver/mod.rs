//! Mastermind solving algorithms
//!
//! The `Solver` owns the candidate set and performs elimination; strategies
//! only decide which remaining candidate to guess next.

mod engine;
mod error;
pub mod minimax;
pub mod strategy;

pub use engine::Solver;
pub use error::SolverError;
pub use strategy::{
    FirstCandidateStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType,
};
