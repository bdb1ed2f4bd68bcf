//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{context, output};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../forecast.toml.example");

/// Execute `config init`.
#[allow(clippy::result_large_err)]
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your scenario ids", path.display()));
    output::note(&format!(
        "2. Run: forecaster inputs check -c {}",
        path.display()
    ));
    output::note(&format!("3. Run: forecaster run -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
#[allow(clippy::result_large_err)]
pub fn execute_show(path: &Path) -> Result<()> {
    let config = context::load_config(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": config,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Input", config.input.path.display());
    output::field(
        "Comparison",
        config
            .output
            .comparison
            .as_ref()
            .map_or_else(|| "(not written)".to_string(), |p| p.display().to_string()),
    );

    output::section("Scenarios");
    output::field("Common", &config.scenarios.common);
    output::field("Base revenue", join(&config.scenarios.base_revenue));
    output::field("Trader COGS", join(&config.scenarios.trader_cogs));
    output::field(
        "Combinations",
        config.scenarios.base_revenue.len() * config.scenarios.trader_cogs.len(),
    );

    output::section("Model");
    for (name, reference) in config.model.inputs() {
        output::field(
            name,
            format!("{} / {}", reference.category, reference.parameter),
        );
    }

    output::section("Report");
    output::field("Currency", &config.report.currency);
    output::field("Precision", config.report.precision);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
#[allow(clippy::result_large_err)]
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Config file is valid");

    let overlap: Vec<String> = config
        .scenarios
        .base_revenue
        .iter()
        .filter(|id| config.scenarios.trader_cogs.contains(id))
        .map(ToString::to_string)
        .collect();
    if !overlap.is_empty() {
        output::section("Warnings");
        output::warning(&format!(
            "{} listed as both base revenue and trader COGS",
            overlap.join(", ")
        ));
    }

    output::field(
        "Next",
        format!("forecaster config show -c {}", path.display()),
    );

    Ok(())
}

fn join<T: ToString>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
