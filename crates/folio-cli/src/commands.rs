use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Browse { section: None });

    match command {
        Commands::Browse { section } => {
            let config_path = resolve_config_path(cli.config.as_deref())?;
            let config = Config::load_from(&config_path)?;
            // The TUI owns stdout/stderr; only a configured file receives logs
            let target = match &config.log.file {
                Some(path) => LogTarget::File(path.clone()),
                None => LogTarget::Disabled,
            };
            logging::init(cli.log_level, target)?;
            handlers::browse::handle(&config, section)
        }

        Commands::Show {
            section,
            project,
            format,
        } => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            handlers::show::handle(section, project, format)
        }

        Commands::Sections => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            handlers::sections::handle()
        }

        Commands::Config { command } => {
            let config_path = resolve_config_path(cli.config.as_deref())?;
            logging::init(cli.log_level, LogTarget::Stderr)?;
            handlers::config::handle(command, &config_path)
        }
    }
}
