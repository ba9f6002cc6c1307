//! The running object table, live host instances and top-level windows of the
//! current platform.

#[cfg(target_os = "windows")]
#[allow(unsafe_code)]
mod windows;

#[cfg(target_os = "windows")]
pub use self::windows::{DteInstance, RotRegistry as SystemRegistry, User32 as SystemWindows};

#[cfg(not(target_os = "windows"))]
mod unsupported;

#[cfg(not(target_os = "windows"))]
pub use self::unsupported::{NoRegistry as SystemRegistry, NoWindows as SystemWindows};
