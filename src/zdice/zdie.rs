use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, Result};
use crate::roller::Roller;

/// A zero-based die: `n` faces numbered `0, 1, ..., n - 1`.
///
/// Handy when a roll is used directly as an index. The zero value has
/// no faces and cannot be rolled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZDie(u32);

impl ZDie {
    pub const Z4: ZDie = ZDie(4);
    pub const Z6: ZDie = ZDie(6);
    pub const Z8: ZDie = ZDie(8);
    pub const Z10: ZDie = ZDie(10);
    pub const Z12: ZDie = ZDie(12);
    pub const Z20: ZDie = ZDie(20);
    pub const Z100: ZDie = ZDie(100);

    pub const fn new(faces: u32) -> Self {
        Self(faces)
    }

    pub const fn faces(self) -> u32 {
        self.0
    }

    /// Returns the sum of `count` rolls.
    ///
    /// # Panics
    ///
    /// Panics if the die has no faces and `count` is non-zero.
    #[tracing::instrument(level = "trace", skip(roller))]
    pub fn roll(self, count: u32, roller: &mut impl Roller) -> u64 {
        (0..count).map(|_| u64::from(roller.roll_below(self.0))).sum()
    }

    /// Returns the largest of `count` rolls.
    ///
    /// `count == 0` returns 0, the same value as a real roll of the
    /// lowest face. Callers that need to tell them apart must check
    /// `count` themselves.
    ///
    /// # Panics
    ///
    /// Panics if the die has no faces and `count` is non-zero.
    #[tracing::instrument(level = "trace", skip(roller))]
    pub fn max(self, count: u32, roller: &mut impl Roller) -> u32 {
        let mut m = 0;
        for _ in 0..count {
            let r = roller.roll_below(self.0);
            if r > m {
                m = r;
            }
        }
        m
    }

    /// Returns the smallest of `count` rolls.
    ///
    /// As with [`ZDie::max`], `count == 0` returns an ambiguous 0.
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
            let r = roller.roll_below(self.0);
            if r < m {
                m = r;
            }
        }
        m
    }

    /// Parses `"Z"` followed by decimal digits, e.g. `"Z6"`.
    pub fn parse(s: &str) -> Result<Self> {
        let Some(digits) = s.strip_prefix('Z') else {
            return Err(DiceError::invalid_format(s));
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DiceError::invalid_format(s));
        }

        match digits.parse() {
            Ok(faces) => Ok(ZDie(faces)),
            Err(_) => Err(DiceError::invalid_format(s)),
        }
    }
}

/// Returns the sum of rolling each die once.
///
/// # Panics
///
/// Panics if any die has no faces.
pub fn roll_many<I>(dice: I, roller: &mut impl Roller) -> u64
where
    I: IntoIterator<Item = ZDie>,
{
    dice.into_iter().map(|z| u64::from(roller.roll_below(z.0))).sum()
}

impl fmt::Display for ZDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z{}", self.0)
    }
}

impl FromStr for ZDie {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self> {
        ZDie::parse(s)
    }
}

impl TryFrom<&str> for ZDie {
    type Error = DiceError;

    fn try_from(s: &str) -> Result<Self> {
        ZDie::parse(s)
    }
}

impl TryFrom<String> for ZDie {
    type Error = DiceError;

    fn try_from(s: String) -> Result<Self> {
        ZDie::parse(&s)
    }
}

impl From<ZDie> for String {
    fn from(z: ZDie) -> Self {
        z.to_string()
    }
}
