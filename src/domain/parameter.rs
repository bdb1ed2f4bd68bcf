//! Parameter rows as they appear in the input table.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use super::id::{ParameterKey, ScenarioId};

/// Value half of a parameter row: an optional constant and/or a per-year series.
///
/// A present `constant` takes precedence over `year_values` when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParameterValues {
    /// Constant broadcast across every year when present.
    pub constant: Option<Decimal>,
    /// Per-year cells keyed by year label; `None` marks a missing cell.
    pub year_values: IndexMap<String, Option<Decimal>>,
}

impl ParameterValues {
    /// Values holding only a constant.
    #[must_use]
    pub fn constant(value: Decimal) -> Self {
        Self {
            constant: Some(value),
            year_values: IndexMap::new(),
        }
    }

    /// Values holding only a per-year series.
    pub fn series<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<Decimal>)>,
        S: Into<String>,
    {
        Self {
            constant: None,
            year_values: values.into_iter().map(|(y, v)| (y.into(), v)).collect(),
        }
    }

    /// Value recorded for a year, if any.
    #[must_use]
    pub fn year(&self, year: &str) -> Option<Decimal> {
        self.year_values.get(year).copied().flatten()
    }

    /// True when neither the constant nor any year cell holds a value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.constant.is_none() && self.year_values.values().all(Option::is_none)
    }
}

/// One row of the input table, keyed by (scenario, category, parameter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRow {
    pub scenario: ScenarioId,
    pub key: ParameterKey,
    pub values: ParameterValues,
}

impl ParameterRow {
    pub fn new(scenario: impl Into<ScenarioId>, key: ParameterKey, values: ParameterValues) -> Self {
        Self {
            scenario: scenario.into(),
            key,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn year_lookup_flattens_missing_cells() {
        let values = ParameterValues::series([("2025", Some(dec!(1000))), ("2026", None)]);
        assert_eq!(values.year("2025"), Some(dec!(1000)));
        assert_eq!(values.year("2026"), None);
        assert_eq!(values.year("2027"), None);
    }

    #[test]
    fn blank_detection() {
        assert!(ParameterValues::default().is_blank());
        assert!(ParameterValues::series([("2025", None::<Decimal>)]).is_blank());
        assert!(!ParameterValues::constant(dec!(0)).is_blank());
    }
}
