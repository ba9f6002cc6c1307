//! Seams between the locate-or-launch logic and the platform's table of
//! running, automatable application instances.
//!
//! The platform adapters live in [`crate::platform`]; tests drive the same
//! logic with in-memory fakes.

use std::num::NonZeroIsize;

use anyhow::Result;


/// One entry of a registry snapshot: an opaque handle plus the name the
/// entry was registered under. Consumed by a single probe.
#[derive(Debug, Clone)]
pub struct Candidate<H> {
    /// Registration (display) name, e.g. `!VisualStudio.DTE.18.0:1234`.
    pub name: String,
    /// Platform handle used to bind the entry.
    pub handle: H,
}

/// Opens the system-wide table of live objects.
pub trait Registry {
    /// An opened table.
    type Table: RegistryTable;

    /// Open the table. Failure sends the caller straight to the launch path.
    fn acquire(&self) -> Result<Self::Table>;
}

/// An opened table of live objects.
pub trait RegistryTable {
    /// Platform handle carried by each [`Candidate`].
    type Handle;
    /// A bound live object. Dropping it releases the binding.
    type Object: LiveObject;
    /// Lazy, finite, non-restartable snapshot of the table.
    type Entries: Iterator<Item = Candidate<Self::Handle>>;

    /// Snapshot the entries registered right now.
    fn enumerate(&self) -> Result<Self::Entries>;

    /// Bind a candidate to its live object. `None` means the entry went stale
    /// between enumeration and binding, which is expected.
    fn bind(&self, candidate: &Candidate<Self::Handle>) -> Option<Self::Object>;
}

/// What the locator needs from a bound host instance.
pub trait LiveObject {
    /// Full path of the resource currently open in the instance, if any.
    fn resource_path(&self) -> Result<Option<String>>;

    /// Activate the instance's main window. `Ok(false)` when the instance
    /// exposes no main window.
    fn activate_window(&self) -> Result<bool>;

    /// Native handle of the main window, if exposed and non-zero.
    fn main_window_handle(&self) -> Result<Option<NativeWindow>>;
}

/// Restores and foregrounds top-level windows.
pub trait WindowSystem {
    /// Restore a minimized window.
    fn restore(&self, window: NativeWindow) -> Result<()>;

    /// Ask the window manager to move the window to the foreground.
    fn bring_to_front(&self, window: NativeWindow) -> Result<()>;
}

/// A non-zero native window handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeWindow(NonZeroIsize);

impl NativeWindow {
    /// Wrap a raw handle; zero means "no window".
    pub fn new(raw: isize) -> Option<Self> {
        NonZeroIsize::new(raw).map(Self)
    }

    /// The raw handle value.
    pub const fn get(self) -> isize {
        self.0.get()
    }
}

/// Case-insensitive substring test on a registration name. Entries that fail
/// it are never bound.
pub fn name_matches(name: &str, prefix: &str) -> bool {
    name.to_lowercase().contains(&prefix.to_lowercase())
}
