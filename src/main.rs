use clap::Parser;
use forecaster::adapter::inbound::cli::command::{Cli, ColorChoice};
use forecaster::adapter::inbound::cli::output::{self, OutputConfig};
use forecaster::adapter::inbound::cli::{diagnostic, dispatch};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = dispatch(&cli.command) {
        let report = diagnostic::report(e, cli.command.config_path());
        if output::is_json() {
            output::error(&report.to_string());
        } else {
            eprintln!("{report:?}");
        }
        std::process::exit(1);
    }
}
