//! Handler for the `resolve` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::ResolveArgs;
use crate::adapter::inbound::cli::{context, output, report};
use crate::application::overlay::merge;
use crate::application::resolver::resolve;
use crate::application::scenario::ScenarioPair;
use crate::domain::ScenarioId;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Execute the resolve command.
#[allow(clippy::result_large_err)]
pub fn execute(args: &ResolveArgs) -> Result<()> {
    let config = context::load_config(&args.source.config)?;
    context::init_logging(&config);

    let pair = select_pair(&config, args)?;
    let table = context::load_input(&config, &args.source)?;
    let inputs = merge(
        &table,
        &config.scenarios.common,
        &pair.base_revenue,
        &pair.trader_cogs,
    )?;

    let found = inputs.get(&args.category, &args.parameter).is_some();
    let series = resolve(&inputs, &args.category, &args.parameter, table.timeline());

    if output::is_json() {
        output::json_output(json!({
            "command": "resolve",
            "scenario": pair.label(),
            "category": args.category,
            "parameter": args.parameter,
            "found": found,
            "values": report::series_json(&series),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Scenario", &pair);
    output::field("Category", &args.category);
    output::field("Parameter", &args.parameter);
    if !found {
        output::warning("Parameter not present in any layer; every year resolves to 0");
    }
    output::section("Resolved values");
    output::lines(&report::series_table(&series, config.report.precision));
    Ok(())
}

/// Combination named on the command line, defaulting to the first
/// configured id on each axis.
#[allow(clippy::result_large_err)]
fn select_pair(config: &Config, args: &ResolveArgs) -> Result<ScenarioPair> {
    let base_revenue = pick(
        args.base_revenue.as_ref(),
        &config.scenarios.base_revenue,
        "scenarios.base_revenue",
    )?;
    let trader_cogs = pick(
        args.trader_cogs.as_ref(),
        &config.scenarios.trader_cogs,
        "scenarios.trader_cogs",
    )?;
    Ok(ScenarioPair::new(base_revenue, trader_cogs))
}

#[allow(clippy::result_large_err)]
fn pick(
    explicit: Option<&ScenarioId>,
    configured: &[ScenarioId],
    field: &'static str,
) -> Result<ScenarioId> {
    explicit
        .or_else(|| configured.first())
        .cloned()
        .ok_or_else(|| ConfigError::MissingField { field }.into())
}
