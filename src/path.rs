use std::fmt;
use std::path::Path;


/// A path reduced to a comparison key: absolute, without trailing separators,
/// case-folded. Two resources are the same iff their keys are equal.
///
/// The key is never turned back into a displayable path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    /// Normalize `path`, or return `None` when it cannot be made absolute
    /// (empty input, unreadable working directory).
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return None;
        }
        let absolute = std::path::absolute(path).ok()?;
        let text = absolute.to_string_lossy();
        Some(Self(trim_separators(&text).to_lowercase()))
    }

    /// The comparison key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Drop trailing separators but keep a bare root (`/`, `C:\`, `\\?\C:\`)
/// intact, so that normalizing twice yields the same key.
fn trim_separators(text: &str) -> &str {
    let trimmed = text.trim_end_matches(is_separator);
    if trimmed.is_empty() || is_drive(trimmed) {
        let keep = text.len().min(trimmed.len() + 1);
        return &text[..keep];
    }
    trimmed
}

/// `C:` or `\\?\C:`, nothing more.
fn is_drive(text: &str) -> bool {
    let drive = text.strip_prefix(r"\\?\").unwrap_or(text).as_bytes();
    drive.len() == 2 && drive[0].is_ascii_alphabetic() && drive[1] == b':'
}
