use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that change the outcome of a locate-or-launch run.
///
/// Per-candidate problems (stale entries, missing properties, paths that
/// cannot be normalized) and window activation problems never become an
/// `Error`; they are logged where they happen.
#[derive(Debug, Error)]
pub enum Error {
    /// The running object table could not be opened or enumerated.
    #[error("running object table unavailable: {0}")]
    RegistryUnavailable(String),

    /// The configured launch command has no program to run.
    #[error("invalid launch command {0:?}: no program given")]
    InvalidCommand(String),

    /// Both the host launch and the default-handler open failed.
    #[error("could not open {}: launch failed ({launch}) and default handler failed", target.display())]
    Fallback {
        /// The resource that was to be opened.
        target: PathBuf,
        /// Why the primary launch failed.
        launch: io::Error,
        /// Why the fallback open failed.
        #[source]
        source: io::Error,
    },
}

/// Result alias for the locate-or-launch core.
pub type Result<T, E = Error> = std::result::Result<T, E>;
