//! Handler for the `run` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{context, output, report};
use crate::adapter::outbound::csv::save_comparison;
use crate::application::comparison::ComparisonTable;
use crate::application::projection::build_model;
use crate::application::scenario::{run_all, ScenarioRun};
use crate::error::{Result, ScenarioError};
use crate::infrastructure::config::Config;

/// Execute the run command.
///
/// Reports for the successful combinations are printed (and the comparison
/// written) even when some combinations fail; the failures then turn into
/// a [`ScenarioError::IncompleteRun`] so the process exits non-zero.
#[allow(clippy::result_large_err)]
pub fn execute(args: &RunArgs) -> Result<()> {
    let mut config = context::load_config(&args.source.config)?;
    apply_overrides(&mut config, args);
    config.validate()?;
    context::init_logging(&config);

    let table = context::load_input(&config, &args.source)?;
    let model = build_model(&config.model);
    let run = run_all(&table, &config.scenarios, model.as_ref())?;
    let comparison = ComparisonTable::from_run(&run, model.result_series(), table.timeline())?;

    if let Some(path) = &config.output.comparison {
        save_comparison(&comparison, path)?;
    }

    if output::is_json() {
        print_json(&config, &run, &comparison);
    } else {
        print_reports(&config, args, &run, &comparison);
    }

    for failure in &run.failures {
        output::error(&format!("{}: {}", failure.pair, failure.reason));
    }

    if run.is_complete() {
        Ok(())
    } else {
        Err(ScenarioError::IncompleteRun {
            failed: run.failures.len(),
            total: run.failures.len() + run.results.len(),
        }
        .into())
    }
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(output) = &args.output {
        config.output.comparison = Some(output.clone());
    }
    if let Some(common) = &args.common {
        config.scenarios.common = common.clone();
    }
    if let Some(ids) = &args.base_revenue {
        config.scenarios.base_revenue = ids.clone();
    }
    if let Some(ids) = &args.trader_cogs {
        config.scenarios.trader_cogs = ids.clone();
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }
}

fn print_reports(config: &Config, args: &RunArgs, run: &ScenarioRun, comparison: &ComparisonTable) {
    let precision = config.report.precision;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Common", &config.scenarios.common);
    output::field("Scenarios", run.results.len() + run.failures.len());
    if output::verbosity() > 0 {
        output::field("Currency", &config.report.currency);
    }

    if !args.summary_only {
        for (label, outcome) in &run.results {
            output::section(&format!("Scenario: {label}"));
            output::lines(&report::projection_table(&outcome.report, precision));
        }
    }

    if run.results.is_empty() {
        output::hint("no combination produced a report; rerun with -v for details");
        return;
    }

    output::section(&format!(
        "{} comparison ({})",
        comparison.series, config.report.currency
    ));
    output::lines(&report::comparison_table(comparison, precision));

    output::section(&format!("Total {} by scenario", comparison.series));
    output::lines(&report::totals_table(comparison, precision));

    if let Some(path) = &config.output.comparison {
        output::success(&format!("Comparison written to {}", path.display()));
    }
}

fn print_json(config: &Config, run: &ScenarioRun, comparison: &ComparisonTable) {
    let scenarios: Vec<_> = run
        .results
        .iter()
        .map(|(label, outcome)| {
            json!({
                "label": label,
                "base_revenue": outcome.pair.base_revenue,
                "trader_cogs": outcome.pair.trader_cogs,
                "series": report::projection_json(&outcome.report),
            })
        })
        .collect();

    output::json_output(json!({
        "command": "run",
        "currency": config.report.currency,
        "scenarios": scenarios,
        "comparison": comparison,
        "failures": run.failures,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::inbound::cli::command::InputArgs;
    use crate::domain::ScenarioId;
    use std::path::PathBuf;

    fn args() -> RunArgs {
        RunArgs {
            source: InputArgs {
                config: PathBuf::from("forecast.toml"),
                input: None,
            },
            output: None,
            common: None,
            base_revenue: None,
            trader_cogs: None,
            summary_only: false,
            log_level: None,
            json_logs: false,
        }
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut config = Config::default();
        let args = RunArgs {
            output: Some(PathBuf::from("out.csv")),
            common: Some(ScenarioId::from("shared")),
            base_revenue: Some(vec![ScenarioId::from("high")]),
            json_logs: true,
            ..args()
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.output.comparison, Some(PathBuf::from("out.csv")));
        assert_eq!(config.scenarios.common.as_str(), "shared");
        assert_eq!(config.scenarios.base_revenue, vec![ScenarioId::from("high")]);
        assert_eq!(config.scenarios.trader_cogs.len(), 3);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn no_overrides_keep_config() {
        let mut config = Config::default();
        apply_overrides(&mut config, &args());
        assert_eq!(config, Config::default());
    }
}
