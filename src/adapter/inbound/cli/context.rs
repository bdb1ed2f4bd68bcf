//! Config and table loading shared by the table-reading commands.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapter::inbound::cli::command::{InputArgs, DEFAULT_CONFIG};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::csv::load_table;
use crate::domain::InputTable;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Load the configuration named on the command line.
///
/// The default path may be absent, in which case built-in defaults apply.
/// An explicitly given path must exist.
#[allow(clippy::result_large_err)]
pub fn load_config(path: &Path) -> Result<Config> {
    if path == Path::new(DEFAULT_CONFIG) {
        Config::load_or_default(path)
    } else {
        Config::load(path)
    }
}

/// Effective input table path: `--input` wins over `[input].path`.
#[must_use]
pub fn input_path(config: &Config, args: &InputArgs) -> PathBuf {
    args.input
        .clone()
        .unwrap_or_else(|| config.input.path.clone())
}

/// Log level implied by the global verbosity flags, if any.
#[must_use]
pub fn verbosity_level() -> Option<&'static str> {
    match output::verbosity() {
        0 if output::is_quiet() => Some("warn"),
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the tracing subscriber, honouring `-v`/`-q` on top of the config.
pub fn init_logging(config: &Config) {
    let mut logging = config.logging.clone();
    if let Some(level) = verbosity_level() {
        logging.level = level.to_string();
    }
    logging.init();
}

/// Read the configured input table.
#[allow(clippy::result_large_err)]
pub fn load_input(config: &Config, args: &InputArgs) -> Result<InputTable> {
    let path = input_path(config, args);
    debug!(path = %path.display(), "Loading input table");
    load_table(&path)
}
