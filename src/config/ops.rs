use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;
use crate::instance::LocateSettings;
use crate::launcher::LaunchCommand;

impl Config {
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("autolink").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "host.command" => Ok(self.host.command.clone()),
            "host.registration_prefix" => Ok(self.host.registration_prefix.clone()),
            "open.wait" => Ok(self.open.wait.to_string()),
            "open.prefer_solution" => Ok(self.open.prefer_solution.to_string()),
            "open.target" => Ok(display_optional(self.open.target.as_deref())),
            "companion.dir" => Ok(display_optional(self.companion.dir.as_deref())),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "host.command" => {
                LaunchCommand::parse(value)?;
                self.host.command = value.to_string();
            }
            "host.registration_prefix" => {
                if value.is_empty() {
                    anyhow::bail!("host.registration_prefix must not be empty");
                }
                self.host.registration_prefix = value.to_string();
            }
            "open.wait" => self.open.wait = parse_bool(value)?,
            "open.prefer_solution" => self.open.prefer_solution = parse_bool(value)?,
            "open.target" => self.open.target = optional_path(value),
            "companion.dir" => self.companion.dir = optional_path(value),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }

    /// Settings for one locate-or-launch run. `wait` forces waiting on top of
    /// `open.wait`.
    pub fn locate_settings(&self, wait: bool) -> Result<LocateSettings> {
        let command = LaunchCommand::parse(&self.host.command)
            .context("Invalid host.command")?;
        Ok(LocateSettings {
            registration_prefix: self.host.registration_prefix.clone(),
            command,
            wait: wait || self.open.wait,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    value.parse::<bool>()
        .with_context(|| format!("Invalid boolean value: {value}"))
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() { None } else { Some(PathBuf::from(value)) }
}

fn display_optional(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}
