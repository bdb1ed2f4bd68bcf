use std::fs;
use std::path::PathBuf;

use forecaster::domain::ScenarioId;
use forecaster::error::{ConfigError, Error};
use forecaster::infrastructure::config::Config;

fn write_temp_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("forecast.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_trims_scenario_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[scenarios]
common = " common "
base_revenue = [" base", "low "]
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.scenarios.common, ScenarioId::from("common"));
    assert_eq!(
        config.scenarios.base_revenue,
        vec![ScenarioId::from("base"), ScenarioId::from("low")]
    );
}

#[test]
fn config_rejects_blank_common_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[scenarios]\ncommon = \"  \"\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::MissingField {
            field: "scenarios.common",
        })) => {}
        Err(err) => panic!("Expected missing common id error, got {err}"),
        Ok(config) => panic!(
            "Expected blank common id to be rejected, got {}",
            config.scenarios.common
        ),
    }
}

#[test]
fn config_rejects_blank_id_in_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[scenarios]\nbase_revenue = [\"base\", \"\"]\n");

    assert!(
        matches!(
            Config::load(&path),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "scenarios.base_revenue",
                ..
            }))
        ),
        "Expected blank base revenue id to be rejected"
    );
}

#[test]
fn config_rejects_unknown_model_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[model]\ntype = \"dcf\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_rejects_excessive_precision() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[report]\nprecision = 11\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "report.precision",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid precision error, got {err}"),
        Ok(_) => panic!("Expected precision 11 to be rejected"),
    }
}

#[test]
fn config_keeps_partial_sections_defaulted() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[report]\ncurrency = \"GBP\"\n");

    let config = Config::load(&path).unwrap();
    assert_eq!(config.report.currency, "GBP");
    assert_eq!(config.report.precision, 0);
    assert_eq!(config.input.path, PathBuf::from("data/inputs.csv"));
    assert_eq!(config.logging.level, "info");
}
