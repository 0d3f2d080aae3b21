//! Four-peg codes
//!
//! A `Code` is either the hidden secret or a guess. Both share the same shape:
//! four colours from the palette with no repeats and no blanks.

use super::Colour;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 4;

/// An ordered sequence of four distinct colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([Colour; CODE_LENGTH]);

/// Error type for codes that break the four-distinct-colours rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    WrongLength(usize),
    UnknownColour(String),
    DuplicateColour(Colour),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Code must have exactly {CODE_LENGTH} colours, got {len}")
            }
            Self::UnknownColour(token) => write!(
                f,
                "Unknown colour '{token}' (choose from red, yellow, orange, green, blue, purple)"
            ),
            Self::DuplicateColour(colour) => {
                write!(f, "Duplicate colour '{colour}' is not allowed")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from four colours
    ///
    /// # Errors
    /// Returns `CodeError::DuplicateColour` if any colour appears twice.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Colour};
    ///
    /// let code = Code::new([Colour::Red, Colour::Yellow, Colour::Orange, Colour::Green]).unwrap();
    /// assert_eq!(code.to_string(), "red yellow orange green");
    ///
    /// assert!(Code::new([Colour::Red, Colour::Red, Colour::Blue, Colour::Green]).is_err());
    /// ```
    pub fn new(colours: [Colour; CODE_LENGTH]) -> Result<Self, CodeError> {
        for (i, colour) in colours.iter().enumerate() {
            if colours[..i].contains(colour) {
                return Err(CodeError::DuplicateColour(*colour));
            }
        }
        Ok(Self(colours))
    }

    /// Build a code the caller already knows is repeat-free
    pub(crate) const fn from_distinct(colours: [Colour; CODE_LENGTH]) -> Self {
        Self(colours)
    }

    /// Parse a code from text such as `"red yellow orange green"` or `"r,y,o,g"`
    ///
    /// # Errors
    /// Returns a `CodeError` describing the first rule the input breaks.
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let tokens: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.len() != CODE_LENGTH {
            return Err(CodeError::WrongLength(tokens.len()));
        }

        let mut colours = [Colour::Red; CODE_LENGTH];
        for (slot, token) in colours.iter_mut().zip(&tokens) {
            *slot = token
                .parse()
                .map_err(|_| CodeError::UnknownColour((*token).to_string()))?;
        }

        Self::new(colours)
    }

    /// Draw a uniformly random code
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut palette = Colour::ALL;
        palette.shuffle(rng);
        Self([palette[0], palette[1], palette[2], palette[3]])
    }

    /// The four colours in order
    #[inline]
    #[must_use]
    pub const fn colours(&self) -> &[Colour; CODE_LENGTH] {
        &self.0
    }

    /// Colour at a position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn colour_at(&self, position: usize) -> Colour {
        self.0[position]
    }

    /// Check whether the colour appears anywhere in the code
    #[inline]
    #[must_use]
    pub fn contains(&self, colour: Colour) -> bool {
        self.0.contains(&colour)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a} {b} {c} {d}")
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
