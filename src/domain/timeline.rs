//! Projection timeline detected from the input table's year columns.

use std::collections::HashSet;

use serde::Serialize;

use super::error::DomainError;

/// Column-name prefix that marks a projection year.
const YEAR_PREFIX: &str = "20";

/// Ordered, non-empty sequence of year labels.
///
/// Labels keep the order of the source columns; they are never sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    years: Vec<String>,
}

impl Timeline {
    /// Build a timeline, rejecting empty or duplicated labels.
    pub fn try_new<I, S>(years: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let years: Vec<String> = years.into_iter().map(Into::into).collect();
        if years.is_empty() {
            return Err(DomainError::EmptyTimeline);
        }

        let mut seen = HashSet::with_capacity(years.len());
        for year in &years {
            if !seen.insert(year.as_str()) {
                return Err(DomainError::DuplicateYear { year: year.clone() });
            }
        }

        Ok(Self { years })
    }

    /// Whether a (trimmed) column header names a projection year.
    #[must_use]
    pub fn is_year_column(name: &str) -> bool {
        name.trim().starts_with(YEAR_PREFIX)
    }

    /// Year labels in source order.
    #[must_use]
    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// Iterate over year labels.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.years.iter().map(String::as_str)
    }

    /// Number of years.
    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Whether the label is part of this timeline.
    #[must_use]
    pub fn contains(&self, year: &str) -> bool {
        self.years.iter().any(|y| y == year)
    }

    /// First year label.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.years[0]
    }

    /// Last year label.
    #[must_use]
    pub fn last(&self) -> &str {
        &self.years[self.years.len() - 1]
    }
}
