//! Writing tables back out as CSV.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use super::columns::{CATEGORY, CONST, PARAMETER, SCENARIO};
use crate::application::comparison::ComparisonTable;
use crate::domain::InputTable;
use crate::error::Result;

const TOTAL_ROW: &str = "Total";

fn cell(value: Option<Decimal>) -> String {
    value.map(|v| v.normalize().to_string()).unwrap_or_default()
}

/// Write a table in the source layout so it can be read back unchanged.
pub fn write_table<W: Write>(table: &InputTable, sink: W) -> Result<()> {
    let mut writer = ::csv::Writer::from_writer(sink);

    let mut header = vec![SCENARIO, CATEGORY, PARAMETER, CONST];
    header.extend(table.timeline().iter());
    writer.write_record(&header)?;

    for row in table.rows() {
        let mut record = vec![
            row.scenario.to_string(),
            row.key.category().to_string(),
            row.key.parameter().to_string(),
            cell(row.values.constant),
        ];
        record.extend(table.timeline().iter().map(|year| cell(row.values.year(year))));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the comparison as `Year,<labels...>` rows followed by a totals row.
pub fn write_comparison<W: Write>(comparison: &ComparisonTable, sink: W) -> Result<()> {
    let mut writer = ::csv::Writer::from_writer(sink);

    let mut header = vec!["Year".to_string()];
    header.extend(comparison.labels.iter().cloned());
    writer.write_record(&header)?;

    for (year, values) in &comparison.rows {
        let mut record = vec![year.clone()];
        record.extend(values.iter().map(|v| cell(Some(*v))));
        writer.write_record(&record)?;
    }

    let mut totals = vec![TOTAL_ROW.to_string()];
    totals.extend(comparison.totals.iter().map(|v| cell(Some(*v))));
    writer.write_record(&totals)?;

    writer.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

/// Write a normalized table to `path`, creating parent directories.
pub fn save_table(table: &InputTable, path: &Path) -> Result<()> {
    write_table(table, create(path)?)?;
    info!(path = %path.display(), rows = table.len(), "Wrote normalized table");
    Ok(())
}

/// Write a comparison to `path`, creating parent directories.
pub fn save_comparison(comparison: &ComparisonTable, path: &Path) -> Result<()> {
    write_comparison(comparison, create(path)?)?;
    info!(
        path = %path.display(),
        scenarios = comparison.labels.len(),
        "Wrote comparison table"
    );
    Ok(())
}
