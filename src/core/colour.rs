//! Peg colours
//!
//! The palette is fixed at six colours. Order matters: it drives the
//! enumeration order of the candidate universe.

use std::fmt;
use std::str::FromStr;

/// One of the six peg colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Red,
    Yellow,
    Orange,
    Green,
    Blue,
    Purple,
}

impl Colour {
    /// The full palette in canonical order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Yellow,
        Self::Orange,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// Lowercase colour name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// Single-letter shorthand accepted on input
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Yellow => 'y',
            Self::Orange => 'o',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Purple => 'p',
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colour {
    type Err = String;

    /// Parse a colour from its name or initial, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == lower || (lower.len() == 1 && lower.starts_with(c.initial())))
            .ok_or_else(|| format!("Unknown colour: {s}"))
    }
}
