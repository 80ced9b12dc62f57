use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseError, prelude::*};

/// Calendar unit a range lines up with.
///
/// Derived from a range on demand, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Start and end fall on the same day
    #[display(fmt = "daily")]
    Daily,
    /// Exactly one whole calendar month
    #[display(fmt = "monthly")]
    Monthly,
    /// Exactly one whole calendar year
    #[display(fmt = "yearly")]
    Yearly,
    /// Any other window, stepped by its length in days
    #[display(fmt = "custom")]
    Custom,
}

impl FromStr for Granularity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseError::UnknownGranularity(s.to_owned())),
        }
    }
}

/// Which neighbour of a range to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display(fmt = "backward")]
    Backward,
    #[display(fmt = "forward")]
    Forward,
}

impl Direction {
    /// `-1` for backward, `1` for forward.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}
