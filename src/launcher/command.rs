use std::ffi::OsString;
use std::path::Path;

use crate::error::{Error, Result};

/// A parsed launch command template such as
/// `"C:\Program Files\...\devenv.com" .`.
///
/// Arguments equal to `.` or `{target}` are replaced by the target path; when
/// there are none, the target is appended as the last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    program: String,
    args: Vec<String>,
}

const TARGET_TOKENS: [&str; 2] = [".", "{target}"];

impl LaunchCommand {
    /// Split `template` on whitespace, keeping double-quoted segments together.
    pub fn parse(template: &str) -> Result<Self> {
        let mut parts = shlex_split(template);
        if parts.is_empty() {
            return Err(Error::InvalidCommand(template.to_string()));
        }
        let program = parts.remove(0);
        Ok(Self { program, args: parts })
    }

    /// The program to start, as written in the template.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with the target substituted in.
    pub fn args_for(&self, target: &Path) -> Vec<OsString> {
        let mut substituted = false;
        let mut args: Vec<OsString> = self
            .args
            .iter()
            .map(|arg| {
                if TARGET_TOKENS.contains(&arg.as_str()) {
                    substituted = true;
                    target.as_os_str().to_os_string()
                } else {
                    OsString::from(arg)
                }
            })
            .collect();
        if !substituted {
            args.push(target.as_os_str().to_os_string());
        }
        args
    }
}

fn shlex_split(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for c in s.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            ' ' | '\t' if !in_quotes => {
                if !current.is_empty() || quoted {
                    parts.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() || quoted {
        parts.push(current);
    }
    parts
}
