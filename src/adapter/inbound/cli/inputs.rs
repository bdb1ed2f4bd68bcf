//! Handlers for the `inputs` command group.

use serde::Serialize;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{CleanArgs, InputArgs};
use crate::adapter::inbound::cli::{context, output};
use crate::adapter::outbound::csv::save_table;
use crate::application::scenario::ScenarioConfig;
use crate::domain::{InputTable, ScenarioId};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct LayerRow {
    #[tabled(rename = "Scenario")]
    scenario: String,
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "Rows")]
    rows: usize,
}

/// What the table holds relative to the configured scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TableSummary {
    years: Vec<String>,
    rows: usize,
    layers: Vec<LayerRow>,
    missing: Vec<String>,
}

fn role(scenarios: &ScenarioConfig, id: &ScenarioId) -> &'static str {
    if *id == scenarios.common {
        "common"
    } else if scenarios.base_revenue.contains(id) {
        "base revenue"
    } else if scenarios.trader_cogs.contains(id) {
        "trader COGS"
    } else {
        "unused"
    }
}

fn summarize(table: &InputTable, scenarios: &ScenarioConfig) -> TableSummary {
    let layers = table
        .scenarios()
        .filter_map(|id| table.layer(id))
        .map(|layer| LayerRow {
            scenario: layer.scenario().to_string(),
            role: role(scenarios, layer.scenario()),
            rows: layer.len(),
        })
        .collect();

    let missing = std::iter::once(&scenarios.common)
        .chain(&scenarios.base_revenue)
        .chain(&scenarios.trader_cogs)
        .filter(|id| !table.has_scenario(id))
        .map(ToString::to_string)
        .collect();

    TableSummary {
        years: table.timeline().years().to_vec(),
        rows: table.len(),
        layers,
        missing,
    }
}

/// Execute `inputs check`.
#[allow(clippy::result_large_err)]
pub fn execute_check(args: &InputArgs) -> Result<()> {
    let config = context::load_config(&args.config)?;
    context::init_logging(&config);

    let path = context::input_path(&config, args);
    let table = context::load_input(&config, args)?;
    let summary = summarize(&table, &config.scenarios);

    if output::is_json() {
        output::json_output(json!({
            "command": "inputs.check",
            "path": path.display().to_string(),
            "summary": summary,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Path", path.display());
    output::field(
        "Years",
        format!(
            "{}..{} ({})",
            table.timeline().first(),
            table.timeline().last(),
            table.timeline().len()
        ),
    );
    output::field("Rows", summary.rows);

    output::section("Scenarios");
    output::lines(&Table::new(&summary.layers).to_string());

    if summary.missing.is_empty() {
        output::success("Every configured scenario has rows");
    } else {
        for id in &summary.missing {
            if *id == config.scenarios.common.as_str() {
                output::error(&format!("common scenario '{id}' has no rows"));
                output::hint("`forecaster run` will refuse to start without it");
            } else {
                output::warning(&format!("'{id}' has no rows; it will contribute nothing"));
            }
        }
    }
    Ok(())
}

/// Execute `inputs clean`.
#[allow(clippy::result_large_err)]
pub fn execute_clean(args: &CleanArgs) -> Result<()> {
    let config = context::load_config(&args.source.config)?;
    context::init_logging(&config);

    let table = context::load_input(&config, &args.source)?;
    save_table(&table, &args.output)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "inputs.clean",
            "output": args.output.display().to_string(),
            "rows": table.len(),
            "years": table.timeline().len(),
        }));
        return Ok(());
    }

    output::success(&format!(
        "Wrote {} rows to {}",
        table.len(),
        args.output.display()
    ));
    Ok(())
}
