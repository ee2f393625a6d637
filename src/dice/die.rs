use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, Result};
use crate::roller::Roller;

/// A die whose faces are numbered `1, 2, ..., n`.
///
/// The zero value has no faces. It parses and prints like any other die
/// but cannot be rolled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Die(u32);

impl Die {
    pub const D4: Die = Die(4);
    pub const D6: Die = Die(6);
    pub const D8: Die = Die(8);
    pub const D10: Die = Die(10);
    pub const D12: Die = Die(12);
    pub const D20: Die = Die(20);
    pub const D100: Die = Die(100);

    pub const fn new(faces: u32) -> Self {
        Self(faces)
    }

    pub const fn faces(self) -> u32 {
        self.0
    }

    /// Returns the sum of `count` rolls. Zero rolls sum to zero.
    ///
    /// # Panics
    ///
    /// Panics if the die has no faces and `count` is non-zero.
    #[tracing::instrument(level = "trace", skip(roller))]
    pub fn roll(self, count: u32, roller: &mut impl Roller) -> u64 {
        if count == 0 {
            return 0;
        }

        // Each roll is an offset in [0, n) plus one; the ones are added up front.
        let mut sum = u64::from(count);
        for _ in 0..count {
            sum += u64::from(roller.roll_below(self.0));
        }
        sum
    }

    /// Returns the largest of `count` rolls.
    ///
    /// `count == 0` returns 0, which no real roll of this die produces.
    ///
    /// # Panics
    ///
    /// Panics if the die has no faces and `count` is non-zero.
    #[tracing::instrument(level = "trace", skip(roller))]
    pub fn max(self, count: u32, roller: &mut impl Roller) -> u32 {
        let mut m = 0;
        for _ in 0..count {
            let r = roller.roll_below(self.0) + 1;
            if r > m {
                m = r;
            }
        }
        m
    }

    /// Returns the smallest of `count` rolls.
    ///
    /// `count == 0` returns 0, which no real roll of this die produces.
    ///
    /// # Panics
    ///
    /// Panics if the die has no faces and `count` is non-zero.
    #[tracing::instrument(level = "trace", skip(roller))]
    pub fn min(self, count: u32, roller: &mut impl Roller) -> u32 {
        if count == 0 {
            return 0;
        }

        let mut m = u32::MAX;
        for _ in 0..count {
            let r = roller.roll_below(self.0) + 1;
            if r < m {
                m = r;
            }
        }
        m
    }

    /// Parses `"D"` followed by decimal digits, e.g. `"D20"`.
    ///
    /// Signs and whitespace are rejected. `"D0"` is accepted.
    pub fn parse(s: &str) -> Result<Self> {
        let digits = match s.strip_prefix('D') {
            Some(digits) if !digits.is_empty() => digits,
            _ => return Err(DiceError::invalid_format(s)),
        };

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DiceError::invalid_format(s));
        }

        digits
            .parse()
            .map(Die)
            .map_err(|_| DiceError::invalid_format(s))
    }
}

/// Returns the sum of rolling each die once.
///
/// # Panics
///
/// Panics if any die has no faces.
pub fn roll_many<I>(dice: I, roller: &mut impl Roller) -> u64
where
    I: IntoIterator<Item = Die>,
{
    dice.into_iter()
        .map(|d| u64::from(roller.roll_below(d.0)) + 1)
        .sum()
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

impl FromStr for Die {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self> {
        Die::parse(s)
    }
}

impl TryFrom<&str> for Die {
    type Error = DiceError;

    fn try_from(s: &str) -> Result<Self> {
        Die::parse(s)
    }
}

impl TryFrom<String> for Die {
    type Error = DiceError;

    fn try_from(s: String) -> Result<Self> {
        Die::parse(&s)
    }
}

impl From<Die> for String {
    fn from(d: Die) -> Self {
        d.to_string()
    }
}
