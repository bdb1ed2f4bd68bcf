//! Normalized input table indexed by scenario.
//!
//! The table is built once from cleaned source rows and never mutated.
//! Rows are grouped into per-scenario [`Layer`]s that preserve source order,
//! which is what the overlay merge relies on.

use indexmap::IndexMap;
use tracing::warn;

use super::error::DomainError;
use super::id::{ParameterKey, ScenarioId};
use super::parameter::ParameterRow;
use super::timeline::Timeline;

/// Immutable table of parameter rows plus the detected timeline.
#[derive(Debug, Clone)]
pub struct InputTable {
    timeline: Timeline,
    rows: Vec<ParameterRow>,
    layers: IndexMap<ScenarioId, Vec<usize>>,
}

/// The rows belonging to a single scenario, in source order.
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    scenario: &'a ScenarioId,
    rows: &'a [ParameterRow],
    indices: &'a [usize],
}

impl<'a> Layer<'a> {
    /// Scenario this layer belongs to.
    #[must_use]
    pub fn scenario(&self) -> &'a ScenarioId {
        self.scenario
    }

    /// Rows of this layer in source order.
    pub fn rows(&self) -> impl Iterator<Item = &'a ParameterRow> + 'a {
        let rows = self.rows;
        let indices = self.indices;
        indices.iter().map(move |&i| &rows[i])
    }

    /// Number of rows in the layer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when the layer has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl InputTable {
    /// Build a table from cleaned rows.
    ///
    /// Every row's year keys must belong to `timeline`. Rows repeating a
    /// (scenario, category, parameter) identity replace the earlier row.
    pub fn try_new(timeline: Timeline, rows: Vec<ParameterRow>) -> Result<Self, DomainError> {
        for row in &rows {
            if let Some(year) = row
                .values
                .year_values
                .keys()
                .find(|year| !timeline.contains(year))
            {
                return Err(DomainError::UnknownYear {
                    scenario: row.scenario.to_string(),
                    key: row.key.to_string(),
                    year: year.clone(),
                });
            }
        }

        let mut latest: IndexMap<(ScenarioId, ParameterKey), ParameterRow> =
            IndexMap::with_capacity(rows.len());
        for row in rows {
            let identity = (row.scenario.clone(), row.key.clone());
            if latest.shift_remove(&identity).is_some() {
                warn!(
                    scenario = %row.scenario,
                    parameter = %row.key,
                    "Duplicate parameter row; keeping the last occurrence"
                );
            }
            latest.insert(identity, row);
        }
        let rows: Vec<ParameterRow> = latest.into_values().collect();

        let mut layers: IndexMap<ScenarioId, Vec<usize>> = IndexMap::new();
        for (index, row) in rows.iter().enumerate() {
            layers.entry(row.scenario.clone()).or_default().push(index);
        }

        Ok(Self {
            timeline,
            rows,
            layers,
        })
    }

    /// Detected projection years.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// All rows after de-duplication.
    #[must_use]
    pub fn rows(&self) -> &[ParameterRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Scenario identifiers in order of first appearance.
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioId> {
        self.layers.keys()
    }

    /// Rows for a scenario, or `None` if the table has no such scenario.
    #[must_use]
    pub fn layer(&self, scenario: &ScenarioId) -> Option<Layer<'_>> {
        self.layers.get_key_value(scenario).map(|(id, indices)| Layer {
            scenario: id,
            rows: &self.rows,
            indices,
        })
    }

    /// Whether the table defines any row for the scenario.
    #[must_use]
    pub fn has_scenario(&self, scenario: &ScenarioId) -> bool {
        self.layers.contains_key(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameter::ParameterValues;
    use rust_decimal_macros::dec;

    fn timeline() -> Timeline {
        Timeline::try_new(["2025", "2026"]).unwrap()
    }

    fn row(scenario: &str, category: &str, parameter: &str, constant: i64) -> ParameterRow {
        ParameterRow::new(
            scenario,
            ParameterKey::new(category, parameter),
            ParameterValues::constant(constant.into()),
        )
    }

    #[test]
    fn groups_rows_into_layers_in_source_order() {
        let table = InputTable::try_new(
            timeline(),
            vec![
                row("common", "a", "x", 1),
                row("base", "a", "x", 2),
                row("common", "a", "y", 3),
            ],
        )
        .unwrap();

        let scenarios: Vec<&str> = table.scenarios().map(ScenarioId::as_str).collect();
        assert_eq!(scenarios, ["common", "base"]);

        let common = table.layer(&"common".into()).unwrap();
        let params: Vec<&str> = common.rows().map(|r| r.key.parameter()).collect();
        assert_eq!(params, ["x", "y"]);
        assert_eq!(common.len(), 2);
        assert!(table.layer(&"low".into()).is_none());
    }

    #[test]
    fn duplicate_identity_keeps_last_row() {
        let table = InputTable::try_new(
            timeline(),
            vec![row("common", "a", "x", 1), row("common", "a", "x", 7)],
        )
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].values.constant, Some(dec!(7)));
    }

    #[test]
    fn rejects_unknown_year_keys() {
        let bad = ParameterRow::new(
            "common",
            ParameterKey::new("a", "x"),
            ParameterValues::series([("2031", Some(dec!(1)))]),
        );
        let result = InputTable::try_new(timeline(), vec![bad]);
        assert!(matches!(result, Err(DomainError::UnknownYear { year, .. }) if year == "2031"));
    }
}
