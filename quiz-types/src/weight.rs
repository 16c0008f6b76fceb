use std::{fmt, iter::Sum, str::FromStr};

use crate::AnswerError;

/// The score contribution of a choice.
///
/// Weights are non-negative. Raw text coming from an input control is parsed
/// with [`str::parse`]: surrounding whitespace is trimmed and an optional
/// leading `+` is accepted. Negative numbers, values above `u32::MAX` and
/// anything that is not a decimal integer are rejected.
///
/// Adding weights saturates at `u32::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u32);

impl Weight {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Weight> for u32 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Weight {
    type Err = AnswerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(value) if value < 0 => Err(AnswerError::NegativeWeight {
                raw: raw.to_string(),
                value,
            }),
            Ok(value) => u32::try_from(value)
                .map(Self)
                .map_err(|_| AnswerError::WeightOutOfRange {
                    raw: raw.to_string(),
                }),
            Err(source) => Err(AnswerError::InvalidWeight {
                raw: raw.to_string(),
                source,
            }),
        }
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}
