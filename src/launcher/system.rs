use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info, warn};

use super::{LaunchCommand, LaunchOutcome, Launcher};

/// Launches real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn spawn(&self, command: &LaunchCommand, target: &Path, wait: bool) -> io::Result<LaunchOutcome> {
        let program = resolve_program(command.program());
        let mut cmd = Command::new(&program);
        cmd.args(command.args_for(target));

        // The host runs from its own directory.
        if let Some(dir) = program.parent().filter(|dir| dir.is_dir()) {
            debug!(dir = %dir.display(), "working directory");
            cmd.current_dir(dir);
        }
        if !wait {
            cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
        }

        let mut child = cmd.spawn()?;
        let pid = child.id();
        info!(pid, program = %program.display(), "host started");

        if !wait {
            return Ok(LaunchOutcome::Detached { pid });
        }
        info!(pid, "waiting for host to exit");
        Ok(waited(pid, child.wait()))
    }

    fn open_with_default(&self, target: &Path) -> io::Result<()> {
        opener::open(target).map_err(io::Error::other)
    }
}

/// The host is already running once `wait` is reached, so a failed wait is
/// reported as an exit without a code rather than as a launch failure.
fn waited(pid: u32, status: io::Result<ExitStatus>) -> LaunchOutcome {
    match status {
        Ok(status) => {
            info!(pid, code = ?status.code(), "host exited");
            LaunchOutcome::Exited { code: status.code() }
        }
        Err(err) => {
            warn!(pid, error = %err, "could not wait for host");
            LaunchOutcome::Exited { code: None }
        }
    }
}

/// Resolve a bare program name through `PATH`; paths are taken as written.
fn resolve_program(program: &str) -> PathBuf {
    let written = Path::new(program);
    if written.components().count() > 1 {
        if !written.is_file() {
            warn!(program, "host executable does not exist");
        }
        return written.to_path_buf();
    }
    which::which(program).unwrap_or_else(|_| {
        warn!(program, "host executable not found on PATH");
        written.to_path_buf()
    })
}
