use anyhow::Result;
use clap::Subcommand;
use std::path::Path;
use autolink::Config;

use super::{config_file, load_config, save_config};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init,
    /// Set a configuration value (e.g. host.command "devenv.com .")
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction, overridden: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = load_config(overridden)?;
            let pretty = toml::to_string_pretty(&config)?;
            print!("{pretty}");
        }
        ConfigAction::Path => {
            println!("{}", config_file(overridden)?.display());
        }
        ConfigAction::Init => {
            let config = Config::default();
            save_config(&config, overridden)?;
            println!("Wrote default config to {}", config_file(overridden)?.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = load_config(overridden)?;
            config.set_value(&key, &value)?;
            save_config(&config, overridden)?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => {
            let config = load_config(overridden)?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}
