//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`ParameterRow`] and a
//! [`TableBuilder`] for [`InputTable`] so tests focus on assertions rather
//! than construction boilerplate.

use rust_decimal::Decimal;

use crate::domain::{InputTable, ParameterKey, ParameterRow, ParameterValues, Timeline};

/// Row holding only a constant.
pub fn constant_row(scenario: &str, category: &str, parameter: &str, value: Decimal) -> ParameterRow {
    ParameterRow::new(
        scenario,
        ParameterKey::new(category, parameter),
        ParameterValues::constant(value),
    )
}

/// Row holding only per-year cells.
pub fn series_row(
    scenario: &str,
    category: &str,
    parameter: &str,
    values: &[(&str, Option<Decimal>)],
) -> ParameterRow {
    ParameterRow::new(
        scenario,
        ParameterKey::new(category, parameter),
        ParameterValues::series(values.iter().map(|(y, v)| (*y, *v))),
    )
}

/// Incremental [`InputTable`] construction.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    years: Vec<String>,
    rows: Vec<ParameterRow>,
}

impl TableBuilder {
    /// Start a table over the given year labels.
    pub fn new(years: &[&str]) -> Self {
        Self {
            years: years.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    #[must_use]
    pub fn row(mut self, row: ParameterRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Append a constant row.
    #[must_use]
    pub fn constant(self, scenario: &str, category: &str, parameter: &str, value: Decimal) -> Self {
        self.row(constant_row(scenario, category, parameter, value))
    }

    /// Append a per-year row with every cell present.
    #[must_use]
    pub fn series(self, scenario: &str, category: &str, parameter: &str, values: &[Decimal]) -> Self {
        let cells: Vec<(String, Option<Decimal>)> = self
            .years
            .iter()
            .cloned()
            .zip(values.iter().copied().map(Some))
            .collect();
        let row = ParameterRow::new(
            scenario,
            ParameterKey::new(category, parameter),
            ParameterValues::series(cells),
        );
        self.row(row)
    }

    /// Finish the table. Panics on invalid input, which is a test bug.
    pub fn build(self) -> InputTable {
        let timeline = Timeline::try_new(self.years).expect("valid test timeline");
        InputTable::try_new(timeline, self.rows).expect("valid test table")
    }
}

/// The two-year example: a common gross margin of 1000/1100 and a common
/// trader COGS share of 10%.
pub fn example_table() -> InputTable {
    TableBuilder::new(&["2025", "2026"])
        .series(
            "common",
            "net_revenue",
            "Total gross margin (base)",
            &[Decimal::from(1000), Decimal::from(1100)],
        )
        .constant(
            "common",
            "trader_cogs",
            "trader_cogs_percent",
            Decimal::new(1, 1),
        )
        .build()
}
