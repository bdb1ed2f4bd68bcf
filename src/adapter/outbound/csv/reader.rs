//! Loading and cleaning the parameter table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::columns::{CATEGORY, CONST, PARAMETER, SCENARIO};
use crate::domain::{InputTable, ParameterKey, ParameterRow, ParameterValues, Timeline};
use crate::error::{InputError, Result};

/// Tokens read as a missing value rather than a coercion failure.
const NULL_TOKENS: &[&str] = &["nan", "n/a", "na", "null", "none"];

/// Column positions resolved from the header row.
#[derive(Debug)]
struct Layout {
    scenario: usize,
    category: usize,
    parameter: usize,
    constant: Option<usize>,
    years: Vec<(usize, String)>,
}

impl Layout {
    fn detect(headers: &[String]) -> std::result::Result<Self, InputError> {
        let position = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &'static str| {
            position(name).ok_or(InputError::MissingColumn { column: name })
        };

        let years: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| Timeline::is_year_column(h))
            .map(|(i, h)| (i, h.clone()))
            .collect();
        if years.is_empty() {
            return Err(InputError::NoYearColumns);
        }

        let layout = Self {
            scenario: require(SCENARIO)?,
            category: require(CATEGORY)?,
            parameter: require(PARAMETER)?,
            constant: position(CONST),
            years,
        };

        let ignored: Vec<&str> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !layout.is_known(*i))
            .map(|(_, h)| h.as_str())
            .collect();
        if !ignored.is_empty() {
            debug!(columns = ?ignored, "Ignoring non-parameter columns");
        }

        Ok(layout)
    }

    fn is_known(&self, index: usize) -> bool {
        index == self.scenario
            || index == self.category
            || index == self.parameter
            || self.constant == Some(index)
            || self.years.iter().any(|(i, _)| *i == index)
    }
}

/// Load and clean a parameter table from disk.
pub fn load_table(path: &Path) -> Result<InputTable> {
    let file = File::open(path).map_err(|source| InputError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_table(file)?;

    info!(
        path = %path.display(),
        rows = table.len(),
        first_year = table.timeline().first(),
        last_year = table.timeline().last(),
        years = table.timeline().len(),
        "Loaded input table"
    );
    Ok(table)
}

/// Parse and clean a parameter table from any CSV source.
///
/// Headers and identity fields are trimmed, numeric cells coerced with
/// [`parse_number`], and rows with no content at all are dropped.
pub fn parse_table<R: Read>(source: R) -> Result<InputTable> {
    let mut reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let layout = Layout::detect(&headers)?;
    let timeline = Timeline::try_new(layout.years.iter().map(|(_, year)| year.clone()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let line = record.position().map_or(0, ::csv::Position::line);
        let text = |index: usize| record.get(index).unwrap_or("").trim();
        let number = |index: usize, column: &str| coerce_cell(text(index), column, line);

        let constant = layout.constant.and_then(|i| number(i, CONST));
        let year_values: IndexMap<String, Option<Decimal>> = layout
            .years
            .iter()
            .map(|(i, year)| (year.clone(), number(*i, year)))
            .collect();

        rows.push(ParameterRow::new(
            text(layout.scenario),
            ParameterKey::new(text(layout.category), text(layout.parameter)),
            ParameterValues {
                constant,
                year_values,
            },
        ));
    }

    Ok(InputTable::try_new(timeline, rows)?)
}

fn coerce_cell(raw: &str, column: &str, line: u64) -> Option<Decimal> {
    match parse_number(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(line, column, value = raw, error = %e, "Unparseable number; treating as missing");
            None
        }
    }
}

/// Coerce a raw cell into a number.
///
/// Thousands separators are stripped. Blank cells, dash placeholders
/// (`-`, `--`, `–`, `—`) and null words such as `NaN` or `n/a` are missing
/// values. A leading minus is a sign, so negative amounts are kept.
/// Plain and scientific notation are accepted; anything else is an error.
pub fn parse_number(raw: &str) -> std::result::Result<Option<Decimal>, rust_decimal::Error> {
    let cleaned = raw.replace(',', "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() || cleaned.chars().all(|c| matches!(c, '-' | '–' | '—')) {
        return Ok(None);
    }
    if NULL_TOKENS.iter().any(|t| cleaned.eq_ignore_ascii_case(t)) {
        return Ok(None);
    }

    cleaned
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(cleaned))
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScenarioId;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_number_handles_separators_and_placeholders() {
        assert_eq!(parse_number("1,234,567").unwrap(), Some(dec!(1234567)));
        assert_eq!(parse_number(" 0.15 ").unwrap(), Some(dec!(0.15)));
        assert_eq!(parse_number("-250.5").unwrap(), Some(dec!(-250.5)));
        assert_eq!(parse_number("1.5e3").unwrap(), Some(dec!(1500)));
        assert_eq!(parse_number("").unwrap(), None);
        assert_eq!(parse_number(" - ").unwrap(), None);
        assert_eq!(parse_number("--").unwrap(), None);
        assert_eq!(parse_number("NaN").unwrap(), None);
        assert_eq!(parse_number("n/a").unwrap(), None);
        assert!(parse_number("12abc").is_err());
    }

    #[test]
    fn parses_and_cleans_table() {
        let csv = "\
 scenario , category ,parameter, const ,unit, 2025 ,2026
common,net_revenue, Total gross margin (base) ,,EUR,\"1,000\",1100
common,trader_cogs,trader_cogs_percent,0.1,%,,
,,,,,,
 vitol ,trader_cogs,trader_cogs_percent,0.2,%,-,oops
";
        let table = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(table.timeline().years(), ["2025", "2026"]);
        assert_eq!(table.len(), 3);

        let margin = &table.rows()[0];
        assert_eq!(margin.key.parameter(), "Total gross margin (base)");
        assert_eq!(margin.values.constant, None);
        assert_eq!(margin.values.year("2025"), Some(dec!(1000)));
        assert_eq!(margin.values.year("2026"), Some(dec!(1100)));

        let vitol = table.layer(&ScenarioId::from("vitol")).unwrap();
        let row = vitol.rows().next().unwrap();
        assert_eq!(row.values.constant, Some(dec!(0.2)));
        assert_eq!(row.values.year("2025"), None);
        assert_eq!(row.values.year("2026"), None);
    }

    #[test]
    fn missing_identity_column_is_fatal() {
        let csv = "scenario,parameter,2025\ncommon,x,1\n";
        let result = parse_table(csv.as_bytes());
        assert!(matches!(
            result,
            Err(Error::Input(InputError::MissingColumn { column: "category" }))
        ));
    }

    #[test]
    fn missing_year_columns_is_fatal() {
        let csv = "scenario,category,parameter,const\ncommon,a,x,1\n";
        let result = parse_table(csv.as_bytes());
        assert!(matches!(result, Err(Error::Input(InputError::NoYearColumns))));
    }

    #[test]
    fn const_column_is_optional() {
        let csv = "scenario,category,parameter,2025\ncommon,a,x,5\n";
        let table = parse_table(csv.as_bytes()).unwrap();
        assert_eq!(table.rows()[0].values.constant, None);
        assert_eq!(table.rows()[0].values.year("2025"), Some(dec!(5)));
    }

    #[test]
    fn load_table_reports_missing_file() {
        let result = load_table(Path::new("definitely/not/here.csv"));
        assert!(matches!(result, Err(Error::Input(InputError::ReadFile { .. }))));
    }
}
