//! Validated name newtype for monster records
//!
//! Names are valid by construction:
//! - Non-empty
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated monster name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonsterName(String);

impl MonsterName {
    /// Create a new validated monster name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Monster name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonsterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MonsterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<MonsterName> for String {
    fn from(name: MonsterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        let name = MonsterName::new("Zoglorp").unwrap();
        assert_eq!(name.as_str(), "Zoglorp");
        assert_eq!(name.to_string(), "Zoglorp");
    }

    #[test]
    fn empty_name_rejected() {
        let err = MonsterName::new("").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn whitespace_only_rejected() {
        let err = MonsterName::new(" \t\n ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn name_is_trimmed() {
        let name = MonsterName::new("  Zog  ").unwrap();
        assert_eq!(name.as_str(), "Zog");
    }

    #[test]
    fn long_name_accepted() {
        let long = "a".repeat(201);
        let name = MonsterName::new(format!("  {long}  ")).unwrap();
        assert_eq!(name.as_str(), long);
    }

    #[test]
    fn deserialize_runs_validation() {
        let ok: MonsterName = serde_json::from_str("\" Blibbex \"").unwrap();
        assert_eq!(ok.as_str(), "Blibbex");
        assert!(serde_json::from_str::<MonsterName>("\"   \"").is_err());
    }
}
