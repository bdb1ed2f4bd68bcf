//! Cross-scenario comparison of the designated result series.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use super::scenario::ScenarioRun;
use crate::domain::Timeline;
use crate::error::{Result, ScenarioError};

/// One row per year, one column per scenario label, plus per-label totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    /// Name of the compared series (e.g. `EBITDA`).
    pub series: String,
    /// Scenario labels in enumeration order.
    pub labels: Vec<String>,
    /// `year -> [value per label]`, in timeline order.
    pub rows: IndexMap<String, Vec<Decimal>>,
    /// Sum over years for each label.
    pub totals: Vec<Decimal>,
}

impl ComparisonTable {
    /// Collect the named series from every successful combination.
    ///
    /// Fails when a report has no series by that name or a total overflows.
    #[allow(clippy::result_large_err)]
    pub fn from_run(run: &ScenarioRun, series: &str, timeline: &Timeline) -> Result<Self> {
        let columns = run
            .results
            .values()
            .map(|outcome| {
                outcome
                    .report
                    .column(series)
                    .ok_or_else(|| ScenarioError::UnknownSeries {
                        scenario: outcome.pair.label(),
                        series: series.to_string(),
                    })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let rows = timeline
            .iter()
            .map(|year| {
                let values = columns
                    .iter()
                    .map(|column| column.get(year).unwrap_or_default())
                    .collect();
                (year.to_string(), values)
            })
            .collect();

        let totals = columns
            .iter()
            .map(|column| column.checked_total())
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            series: series.to_string(),
            labels: run.results.keys().cloned().collect(),
            rows,
            totals,
        })
    }

    /// Value for a year and label.
    #[must_use]
    pub fn value(&self, year: &str, label: &str) -> Option<Decimal> {
        let column = self.labels.iter().position(|l| l == label)?;
        self.rows.get(year).and_then(|row| row.get(column)).copied()
    }

    /// Total for a label.
    #[must_use]
    pub fn total(&self, label: &str) -> Option<Decimal> {
        let column = self.labels.iter().position(|l| l == label)?;
        self.totals.get(column).copied()
    }
}
