//! Command-line interface definitions.
//!
//! Defines the CLI structure for the forecaster application using `clap`.
//! The CLI runs scenario projections, resolves individual parameters,
//! inspects the input table and manages configuration files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::ScenarioId;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "forecast.toml";

/// Scenario-layered multi-year EBITDA projections
#[derive(Parser, Debug)]
#[command(name = "forecaster")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the forecaster CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project every scenario combination and compare results
    Run(RunArgs),

    /// Resolve one parameter for a single scenario combination
    Resolve(ResolveArgs),

    /// Inspect or normalize the input table
    #[command(subcommand)]
    Inputs(InputsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `forecaster inputs`.
#[derive(Subcommand, Debug)]
pub enum InputsCommand {
    /// Summarize the table: timeline, scenarios and row counts.
    Check(InputArgs),
    /// Write the cleaned table back out in the source layout.
    Clean(CleanArgs),
}

/// Subcommands for `forecaster config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Configuration and input table location shared by table-reading commands.
#[derive(Parser, Debug)]
pub struct InputArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Override the input table path.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the `run` subcommand.
///
/// All optional fields override the corresponding configuration file values.
#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Write the comparison table to this CSV file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the common scenario id.
    #[arg(long)]
    pub common: Option<ScenarioId>,

    /// Comma-separated base-revenue scenario ids (e.g., "base,low").
    #[arg(long, value_delimiter = ',')]
    pub base_revenue: Option<Vec<ScenarioId>>,

    /// Comma-separated trader-COGS scenario ids (e.g., "vitol,gen-i,met").
    #[arg(long, value_delimiter = ',')]
    pub trader_cogs: Option<Vec<ScenarioId>>,

    /// Only print the comparison, not each scenario's report.
    #[arg(long)]
    pub summary_only: bool,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `resolve` subcommand.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Parameter category (e.g., "net_revenue").
    pub category: String,

    /// Parameter name (e.g., "Total gross margin (base)").
    pub parameter: String,

    /// Base-revenue scenario (default: first configured).
    #[arg(long)]
    pub base_revenue: Option<ScenarioId>,

    /// Trader-COGS scenario (default: first configured).
    #[arg(long)]
    pub trader_cogs: Option<ScenarioId>,
}

/// Arguments for the `inputs clean` subcommand.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Destination CSV for the normalized table.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = DEFAULT_CONFIG)]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
