use crate::args::ConfigCommand;
use crate::config::Config;
use anyhow::{Result, bail};
use std::path::Path;

pub fn handle(command: ConfigCommand, config_path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Path => {
            println!("{}", config_path.display());
        }
        ConfigCommand::Show => {
            let config = Config::load_from(config_path)?;
            print!("{}", config.to_toml()?);
        }
        ConfigCommand::Init { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default().save_to(config_path)?;
            tracing::info!(path = %config_path.display(), "wrote default config");
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}
