use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {0}")]
pub struct DifficultyParseError(pub String);

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Preset numeric-range tier controlling how large generated operands get.
///
/// - `Easy`: sums below 10, products up to 5 x 5
/// - `Medium`: sums below 20, products up to 10 x 10
/// - `Hard`: sums below 50, products up to 20 x 20
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every tier in the order the entry screen lists them.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Exclusive upper bound for addition operands and the subtraction spread.
    #[must_use]
    pub fn add_subtract_range(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 50,
        }
    }

    /// Inclusive upper bound for multiplication operands.
    #[must_use]
    pub fn multiply_range(self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 10,
            Difficulty::Hard => 20,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DifficultyParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_grow_with_tier() {
        assert_eq!(
            Difficulty::ALL.map(Difficulty::add_subtract_range),
            [10, 20, 50]
        );
        assert_eq!(Difficulty::ALL.map(Difficulty::multiply_range), [5, 10, 20]);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        let err = "extreme".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, DifficultyParseError("extreme".into()));
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        let back: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(back, Difficulty::Easy);
    }
}
