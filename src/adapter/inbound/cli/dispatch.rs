//! Routing from parsed commands to handlers.

use std::path::Path;

use super::command::{Commands, ConfigCommand, InputsCommand};
use super::{config, inputs, resolve, run};
use crate::error::Result;

/// Dispatch a parsed command to its handler.
#[allow(clippy::result_large_err)]
pub fn dispatch(command: &Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run::execute(args),
        Commands::Resolve(args) => resolve::execute(args),
        Commands::Inputs(InputsCommand::Check(args)) => inputs::execute_check(args),
        Commands::Inputs(InputsCommand::Clean(args)) => inputs::execute_clean(args),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}

impl Commands {
    /// Configuration file the command reads, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Self::Run(args) => Some(args.source.config.as_path()),
            Self::Resolve(args) => Some(args.source.config.as_path()),
            Self::Inputs(InputsCommand::Check(args)) => Some(args.config.as_path()),
            Self::Inputs(InputsCommand::Clean(args)) => Some(args.source.config.as_path()),
            Self::Config(ConfigCommand::Init(_)) => None,
            Self::Config(ConfigCommand::Show(args) | ConfigCommand::Validate(args)) => {
                Some(args.config.as_path())
            }
        }
    }
}
