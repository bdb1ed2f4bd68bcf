//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scenario identifier - newtype for type safety.
///
/// Values are trimmed on construction so that `" base "` and `"base"`
/// select the same layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct ScenarioId(String);

impl ScenarioId {
    /// Create a new `ScenarioId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.len() == id.len() {
            Self(id)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Get the scenario ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ScenarioId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ScenarioId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identity of a parameter once the scenario dimension is collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParameterKey {
    category: String,
    parameter: String,
}

impl ParameterKey {
    /// Create a key from a category and parameter name.
    pub fn new(category: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            parameter: parameter.into(),
        }
    }

    /// The category half of the key.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The parameter half of the key.
    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.parameter)
    }
}
