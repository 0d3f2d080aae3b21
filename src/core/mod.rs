//! Core domain types for Mastermind
//!
//! Colours, codes, feedback and the universe of candidate codes.
//! Everything here is pure and deterministic.

mod code;
mod colour;
mod feedback;
mod universe;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use colour::Colour;
pub use feedback::Feedback;
pub use universe::{UNIVERSE_SIZE, generate_all};
