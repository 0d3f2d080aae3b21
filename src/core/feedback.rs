//! Guess feedback
//!
//! Feedback is a pair of counts:
//! - exact: pegs with the right colour in the right position
//! - colour only: further colours present in the secret but misplaced
//!
//! Because codes never repeat a colour, every shared colour is counted once.

use super::{CODE_LENGTH, Code};
use std::fmt;
use std::str::FromStr;

/// Feedback for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: u8,
    colour_only: u8,
}

impl Feedback {
    /// Four exact matches
    pub const WIN: Self = Self {
        exact: CODE_LENGTH as u8,
        colour_only: 0,
    };

    /// Create feedback from raw counts
    ///
    /// Returns `None` if the counts exceed the number of pegs.
    #[must_use]
    pub const fn new(exact: u8, colour_only: u8) -> Option<Self> {
        if exact as usize + colour_only as usize > CODE_LENGTH {
            return None;
        }
        Some(Self { exact, colour_only })
    }

    /// Pegs in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Shared colours in the wrong position
    #[inline]
    #[must_use]
    pub const fn colour_only(self) -> u8 {
        self.colour_only
    }

    /// Check if the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let secret: Code = "red yellow orange green".parse().unwrap();
    /// let guess: Code = "red orange yellow blue".parse().unwrap();
    ///
    /// // red exact, yellow and orange swapped
    /// assert_eq!(Feedback::evaluate(&guess, &secret), Feedback::new(1, 2).unwrap());
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Code, secret: &Code) -> Self {
        let exact = guess
            .colours()
            .iter()
            .zip(secret.colours())
            .filter(|(g, s)| g == s)
            .count();

        let shared = guess
            .colours()
            .iter()
            .filter(|&&colour| secret.contains(colour))
            .count();

        Self {
            exact: exact as u8,
            colour_only: (shared - exact) as u8,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.colour_only)
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse feedback written as `"1 2"`, `"1,2"` or `"(1, 2)"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let counts: Vec<u8> = s
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
            .filter(|t| !t.is_empty())
            .map(|t| {
                if t.bytes().all(|b| b.is_ascii_digit()) {
                    t.parse().ok()
                } else {
                    None
                }
            })
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback: {s}"))?;

        match counts.as_slice() {
            &[exact, colour_only] => {
                Self::new(exact, colour_only).ok_or_else(|| format!("Impossible feedback: {s}"))
            }
            _ => Err(format!("Invalid feedback: {s}")),
        }
    }
}
