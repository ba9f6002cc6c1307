mod config;
mod list;
mod open;

use anyhow::Result;
use std::path::{Path, PathBuf};

use autolink::Config;

pub use config::{cmd_config, ConfigAction};
pub use list::cmd_list;
pub use open::{cmd_open, OpenArgs};

/// The config file in use: `--config` if given, else the default location.
pub fn config_file(overridden: Option<&Path>) -> Result<PathBuf> {
    overridden.map_or_else(Config::path, |path| Ok(path.to_path_buf()))
}

pub fn load_config(overridden: Option<&Path>) -> Result<Config> {
    match overridden {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

pub fn save_config(config: &Config, overridden: Option<&Path>) -> Result<()> {
    match overridden {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
}
