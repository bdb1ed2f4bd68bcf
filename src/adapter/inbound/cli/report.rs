//! Table rendering for projection results.
//!
//! Amounts are printed right-aligned with thousands separators, rounded
//! half away from zero to the configured number of decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{json, Map, Value};
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::application::comparison::ComparisonTable;
use crate::domain::{ProjectionReport, ResolvedSeries};

/// Format an amount as `1,234,567` (or `1,234,567.89` with `precision = 2`).
#[must_use]
pub fn format_amount(value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.*}", precision as usize, rounded.abs());
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(digits.len() + whole.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// One row per year, one column per series in the report.
#[must_use]
pub fn projection_table(report: &ProjectionReport, precision: u32) -> String {
    let mut builder = Builder::default();
    let mut header = vec!["Year".to_string()];
    header.extend(report.series().iter().map(|s| s.name().to_string()));
    builder.push_record(header);

    for (year, _) in report.result().iter() {
        let mut row = vec![year.to_string()];
        row.extend(
            report
                .series()
                .iter()
                .map(|s| format_amount(s.get(year).unwrap_or_default(), precision)),
        );
        builder.push_record(row);
    }

    render(builder)
}

/// A single resolved series as `Year | value`.
#[must_use]
pub fn series_table(series: &ResolvedSeries, precision: u32) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Year".to_string(), series.name().to_string()]);
    for (year, value) in series.iter() {
        builder.push_record([year.to_string(), format_amount(value, precision)]);
    }
    render(builder)
}

/// Result series side by side, one column per scenario label.
#[must_use]
pub fn comparison_table(comparison: &ComparisonTable, precision: u32) -> String {
    let mut builder = Builder::default();
    let mut header = vec!["Year".to_string()];
    header.extend(comparison.labels.iter().cloned());
    builder.push_record(header);

    for (year, values) in &comparison.rows {
        let mut row = vec![year.clone()];
        row.extend(values.iter().map(|v| format_amount(*v, precision)));
        builder.push_record(row);
    }

    render(builder)
}

/// Per-scenario totals of the compared series.
#[must_use]
pub fn totals_table(comparison: &ComparisonTable, precision: u32) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Scenario".to_string(), format!("Total {}", comparison.series)]);
    for (label, total) in comparison.labels.iter().zip(&comparison.totals) {
        builder.push_record([label.clone(), format_amount(*total, precision)]);
    }
    render(builder)
}

/// `{year: value}` for one series.
#[must_use]
pub fn series_json(series: &ResolvedSeries) -> Value {
    let values: Map<String, Value> = series
        .iter()
        .map(|(year, value)| (year.to_string(), json!(value)))
        .collect();
    Value::Object(values)
}

/// `{series name: {year: value}}` for a whole report.
#[must_use]
pub fn projection_json(report: &ProjectionReport) -> Value {
    let series: Map<String, Value> = report
        .series()
        .iter()
        .map(|s| (s.name().to_string(), series_json(s)))
        .collect();
    Value::Object(series)
}
