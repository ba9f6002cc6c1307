use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const SOLUTION_EXTENSIONS: [&str; 2] = ["sln", "slnx"];

/// Resolve what the host should open for `path`.
///
/// A directory resolves to its first solution file, if any. A project file
/// resolves to the first solution beside it when `prefer_solution` is set.
/// Anything else is opened as given.
pub fn resolve(path: &Path, prefer_solution: bool) -> Result<PathBuf> {
    let path = std::path::absolute(path)
        .with_context(|| format!("Failed to make {} absolute", path.display()))?;

    if path.is_dir() {
        return Ok(first_solution(&path).unwrap_or(path));
    }

    if prefer_solution && !is_solution(&path) {
        if let Some(solution) = path.parent().and_then(first_solution) {
            info!(project = %path.display(), solution = %solution.display(), "opening solution instead of project");
            return Ok(solution);
        }
    }
    Ok(path)
}

/// Whether `path` has a solution file extension.
pub fn is_solution(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOLUTION_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}

fn first_solution(dir: &Path) -> Option<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "could not list directory");
            return None;
        }
    };

    let mut solutions: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_solution(p))
        .collect();
    solutions.sort();
    for solution in &solutions {
        debug!(solution = %solution.display(), "solution file");
    }
    solutions.into_iter().next()
}
