//! Non-negative body part counts (eyes, tentacles)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// How many of a body part a monster has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyPartCount(u32);

impl BodyPartCount {
    pub const ZERO: Self = Self(0);

    pub fn new(count: u32) -> Self {
        Self(count)
    }

    /// Parse raw form text as a count.
    ///
    /// Surrounding whitespace is ignored; the remainder must be a whole
    /// base-10 integer. A leading prefix is never accepted on its own, so
    /// `"4abc"` and `"4.5"` fail just like `"abc"`.
    ///
    /// # Errors
    ///
    /// - `DomainError::Parse` for empty or non-integer text
    /// - `DomainError::Validation` for negative or out-of-range values
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(DomainError::parse("count is empty"));
        }
        let value: i64 = text
            .parse()
            .map_err(|_| DomainError::parse(format!("'{text}' is not a whole number")))?;
        if value < 0 {
            return Err(DomainError::validation(format!(
                "count cannot be negative (got {value})"
            )));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("count {value} is too large")))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BodyPartCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BodyPartCount {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<BodyPartCount> for u32 {
    fn from(value: BodyPartCount) -> Self {
        value.0
    }
}
