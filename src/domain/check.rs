//! Check identity domain type

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a check, used to select its state record
///
/// Validated on construction so it is always safe to use as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CheckId(String);

impl CheckId {
    /// Create a new CheckId with validation
    ///
    /// # Errors
    /// Returns `DomainError::EmptyCheckId` for an empty name and
    /// `DomainError::InvalidCheckId` for names with characters outside
    /// `[A-Za-z0-9_-]`
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyCheckId);
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidCheckId(name));
        }
        Ok(Self(name))
    }

    /// Create a CheckId from a known-good literal
    pub(crate) fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Get the name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name with its first letter capitalised, for notification titles
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CheckId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CheckId> for String {
    fn from(id: CheckId) -> Self {
        id.0
    }
}
