mod command;
mod system;

pub use command::LaunchCommand;
pub use system::SystemLauncher;

use std::io;
use std::path::Path;

use tracing::{error, info, warn};

use crate::error::{Error, Result};


/// What a launch actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The host started and was left running on its own.
    Detached {
        /// Process id of the new host.
        pid: u32,
    },
    /// The host ran to completion; `None` when it ended without an exit code.
    Exited {
        /// The host's exit code.
        code: Option<i32>,
    },
    /// The host could not be started; the target was handed to the OS
    /// default handler instead.
    OpenedWithDefault,
}

impl LaunchOutcome {
    /// Process exit status to report for this outcome.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Detached { .. } | Self::OpenedWithDefault => 0,
            Self::Exited { code: Some(code) } => *code,
            Self::Exited { code: None } => 1,
        }
    }
}

/// Starts host processes.
pub trait Launcher {
    /// Start `command` pointed at `target`. With `wait`, block until it exits.
    fn spawn(&self, command: &LaunchCommand, target: &Path, wait: bool) -> io::Result<LaunchOutcome>;

    /// Ask the OS to open `target` with its default handler.
    fn open_with_default(&self, target: &Path) -> io::Result<()>;
}

/// Launch the host for `target`, falling back once to the OS default handler.
///
/// The fallback is attempted exactly once; if it fails too the error is
/// returned and nothing is retried.
pub fn launch<L: Launcher>(
    launcher: &L,
    command: &LaunchCommand,
    target: &Path,
    wait: bool,
) -> Result<LaunchOutcome> {
    info!(program = command.program(), target = %target.display(), wait, "launching host");
    let launch_err = match launcher.spawn(command, target, wait) {
        Ok(outcome) => return Ok(outcome),
        Err(err) => err,
    };

    warn!(
        program = command.program(),
        error = %launch_err,
        "could not start host; falling back to the default handler"
    );
    match launcher.open_with_default(target) {
        Ok(()) => {
            info!(target = %target.display(), "opened with the default handler");
            Ok(LaunchOutcome::OpenedWithDefault)
        }
        Err(source) => {
            error!(target = %target.display(), error = %source, "default handler failed too");
            Err(Error::Fallback {
                target: target.to_path_buf(),
                launch: launch_err,
                source,
            })
        }
    }
}
