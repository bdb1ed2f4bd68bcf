//! On-disk fixtures for CLI and adapter tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Input table covering every default scenario.
///
/// `low` lowers the margin, each trader overrides the COGS share, and `met`
/// is deliberately absent so its layer resolves to nothing.
pub const SAMPLE_CSV: &str = "\
scenario,category,parameter,const,2025,2026
common,net_revenue,Total gross margin (base),,\"1,000\",\"1,100\"
common,trader_cogs,trader_cogs_percent,0.1,,
base,net_revenue,Total gross margin (base),,\"2,000\",\"2,200\"
low,net_revenue,Total gross margin (base),,500,-
vitol,trader_cogs,trader_cogs_percent,0.2,,
gen-i,trader_cogs,trader_cogs_percent,0.25,,
";

/// Configuration pointing at `inputs.csv` next to it.
pub const SAMPLE_TOML: &str = r#"[input]
path = "inputs.csv"

[scenarios]
common = "common"
base_revenue = ["base", "low"]
trader_cogs = ["vitol", "gen-i", "met"]
"#;

/// Write `content` to `dir/name` and return the path.
pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// Write [`SAMPLE_CSV`] and a config referring to it; returns the config path.
pub fn sample_workspace(dir: &Path) -> PathBuf {
    write(dir, "inputs.csv", SAMPLE_CSV);
    let toml = SAMPLE_TOML.replace(
        "inputs.csv",
        &dir.join("inputs.csv").display().to_string().replace('\\', "/"),
    );
    write(dir, "forecast.toml", &toml)
}
