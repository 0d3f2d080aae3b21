//! Terminal output formatting
//!
//! Presentation lives here, apart from the solver core.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_solve_result, print_test_all_statistics};
