use anyhow::Result;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// How many entries [`log`] prints before summarizing the rest.
pub const MAX_LISTED: usize = 30;

/// A companion source file and where it shows up in the host project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Path relative to the companion directory.
    pub relative: PathBuf,
    /// Virtual link inside the host project, e.g. `Rust\src\main.rs`.
    pub link: String,
}

/// Every `*.rs` file under `dir`, sorted by path. A missing directory yields
/// an empty list.
pub fn rust_sources(dir: &Path) -> Result<Vec<SourceEntry>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension() != Some(OsStr::new("rs")) {
            continue;
        }
        let relative = path.strip_prefix(dir).unwrap_or(path).to_path_buf();
        let link = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("\\");
        entries.push(SourceEntry {
            link: format!("Rust\\{link}"),
            relative,
        });
    }
    Ok(entries)
}

/// Log the companion sources of `dir` as the host project will see them.
pub fn log(dir: &Path) {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "companion directory does not exist; skipping snapshot");
        return;
    }
    let entries = match rust_sources(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), error = %format!("{err:#}"), "could not list companion sources");
            return;
        }
    };

    info!(dir = %dir.display(), count = entries.len(), "companion sources");
    for line in listing(&entries) {
        info!("{line}");
    }
}

/// One line per entry, at most [`MAX_LISTED`] of them, then a summary of the
/// rest.
pub fn listing(entries: &[SourceEntry]) -> Vec<String> {
    let mut lines: Vec<String> = entries
        .iter()
        .take(MAX_LISTED)
        .enumerate()
        .map(|(i, entry)| format!("  [{:02}] {}  ->  {}", i + 1, entry.relative.display(), entry.link))
        .collect();
    if entries.len() > MAX_LISTED {
        lines.push(format!("  plus {} more", entries.len() - MAX_LISTED));
    }
    lines
}
