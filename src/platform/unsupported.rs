use anyhow::{bail, Result};

use crate::registry::{Candidate, LiveObject, NativeWindow, Registry, RegistryTable, WindowSystem};

/// Stand-in registry for platforms without a running object table. Always
/// unavailable, so every open goes straight to the launch path.
#[derive(Debug, Default)]
pub struct NoRegistry;

impl NoRegistry {
    /// Matches the Windows constructor.
    pub const fn new() -> Self {
        Self
    }
}

/// Uninhabited: a table is never opened here.
#[derive(Debug)]
pub enum NoTable {}

/// Uninhabited: nothing is ever bound here.
#[derive(Debug)]
pub enum NoObject {}

impl Registry for NoRegistry {
    type Table = NoTable;

    fn acquire(&self) -> Result<NoTable> {
        bail!("the running object table is only available on Windows")
    }
}

impl RegistryTable for NoTable {
    type Handle = ();
    type Object = NoObject;
    type Entries = std::iter::Empty<Candidate<()>>;

    fn enumerate(&self) -> Result<Self::Entries> {
        match *self {}
    }

    fn bind(&self, _candidate: &Candidate<()>) -> Option<NoObject> {
        match *self {}
    }
}

impl LiveObject for NoObject {
    fn resource_path(&self) -> Result<Option<String>> {
        match *self {}
    }

    fn activate_window(&self) -> Result<bool> {
        match *self {}
    }

    fn main_window_handle(&self) -> Result<Option<NativeWindow>> {
        match *self {}
    }
}

/// Window system for platforms where windows cannot be foregrounded by handle.
#[derive(Debug, Default)]
pub struct NoWindows;

impl WindowSystem for NoWindows {
    fn restore(&self, _window: NativeWindow) -> Result<()> {
        bail!("restoring windows is not supported on this platform")
    }

    fn bring_to_front(&self, _window: NativeWindow) -> Result<()> {
        bail!("foregrounding windows is not supported on this platform")
    }
}
