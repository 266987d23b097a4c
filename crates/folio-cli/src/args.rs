use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use folio_types::Section;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse a personal portfolio in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml (overrides FOLIO_CONFIG)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive portfolio (default)
    Browse {
        #[arg(long, value_parser = parse_section)]
        section: Option<Section>,
    },

    /// Render a single page to stdout
    Show {
        #[arg(value_parser = parse_section, default_value = "about")]
        section: Section,

        #[arg(long, help = "Open the detail view of this project (requires the projects section)")]
        project: Option<String>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// List sections with their shortcut keys
    Sections,

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved config file path
    Path,

    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        #[arg(long)]
        force: bool,
    },
}

fn parse_section(raw: &str) -> Result<Section, String> {
    raw.parse::<Section>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_parses_section_case_insensitively() {
        let cli = Cli::try_parse_from(["folio", "show", "SKILLS"]).unwrap();
        match cli.command {
            Some(Commands::Show {
                section, format, ..
            }) => {
                assert_eq!(section, Section::Skills);
                assert_eq!(format, OutputFormat::Plain);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(Cli::try_parse_from(["folio", "show", "blog"]).is_err());
    }

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, LogLevel::Warn);
    }
}
