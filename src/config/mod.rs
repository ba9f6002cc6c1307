mod ops;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default launch command: the console shim of the IDE, which forwards to
/// the GUI and keeps the exit code when waiting.
pub const DEFAULT_HOST_COMMAND: &str =
    r#""C:\Program Files\Microsoft Visual Studio\18\Community\Common7\IDE\devenv.com" ."#;

/// Default registration-name prefix of the IDE's automation objects.
pub const DEFAULT_REGISTRATION_PREFIX: &str = "VisualStudio.DTE.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: HostConfig,
    pub open: OpenConfig,
    pub companion: CompanionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Command that starts the host, e.g. `devenv.com .`. A `.` or
    /// `{target}` argument is replaced by the target path.
    pub command: String,
    /// Registration names of the host's running instances contain this.
    pub registration_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenConfig {
    /// Wait for a newly launched host to exit.
    pub wait: bool,
    /// Open the solution beside a project file instead of the project.
    pub prefer_solution: bool,
    /// Target opened when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// Companion source directory listed before opening.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_HOST_COMMAND.to_string(),
            registration_prefix: DEFAULT_REGISTRATION_PREFIX.to_string(),
        }
    }
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            wait: false,
            prefer_solution: true,
            target: None,
        }
    }
}
