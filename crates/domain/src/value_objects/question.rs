//! Question value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A user-submitted question, trimmed and guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    value: String,
}

impl Question {
    /// Create a new question, trimming surrounding whitespace
    ///
    /// Empty or whitespace-only input is rejected; no upper length bound
    /// is enforced.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let value = text.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::EmptyQuestion);
        }

        Ok(Self { value })
    }

    /// Get the question text as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Lower-cased copy of the question text, used for keyword matching
    pub fn to_lowercase(&self) -> String {
        self.value.to_lowercase()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
