use std::path::Path;

use tracing::{info, warn};

use crate::activate::activate;
use crate::error::Result;
use crate::launcher::{launch, LaunchCommand, LaunchOutcome, Launcher};
use crate::locator::{find_instance, MatchResult};
use crate::path::NormalizedPath;
use crate::registry::{Registry, WindowSystem};


/// Everything the locate-or-launch run needs to know about the host.
#[derive(Debug, Clone)]
pub struct LocateSettings {
    /// Registration-name prefix of the host family, e.g. `VisualStudio.DTE.`.
    pub registration_prefix: String,
    /// How to start a new host.
    pub command: LaunchCommand,
    /// Block until a newly launched host exits.
    pub wait: bool,
}

/// How the target ended up open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instance {
    /// A running host already had the target open and was brought forward.
    Reused,
    /// A new host was launched (or the default handler opened the target).
    Launched(LaunchOutcome),
}

impl Instance {
    /// Reuse the running host that has `target` open, or launch a new one.
    pub fn reuse_or_launch<R, W, L>(
        target: &Path,
        settings: &LocateSettings,
        registry: &R,
        windows: &W,
        launcher: &L,
    ) -> Result<Self>
    where
        R: Registry,
        W: WindowSystem,
        L: Launcher,
    {
        info!(target = %target.display(), "checking for a running instance");
        match NormalizedPath::new(target) {
            Some(key) => {
                if let MatchResult::Found(object) =
                    find_instance(registry, &settings.registration_prefix, &key)
                {
                    activate(&object, windows);
                    drop(object);
                    info!("reused running instance; not launching a new one");
                    return Ok(Self::Reused);
                }
                info!("no running instance has the target open");
            }
            None => warn!(target = %target.display(), "target cannot be normalized; skipping reuse"),
        }

        launch(launcher, &settings.command, target, settings.wait).map(Self::Launched)
    }

    /// Process exit status to report.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Reused => 0,
            Self::Launched(outcome) => outcome.exit_code(),
        }
    }
}
