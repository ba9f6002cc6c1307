//! In-memory registry, window system and launcher used by the unit tests.

use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, bail, Result};

use crate::launcher::{LaunchCommand, LaunchOutcome, Launcher};
use crate::registry::{Candidate, LiveObject, NativeWindow, Registry, RegistryTable, WindowSystem};

/// Counts every interaction with the fake registry.
#[derive(Debug, Default)]
pub struct Ledger {
    pub binds: Cell<usize>,
    pub releases: Cell<usize>,
    pub bound: RefCell<Vec<String>>,
    pub activations: RefCell<Vec<String>>,
}

impl Ledger {
    pub fn balanced(&self) -> bool {
        self.binds.get() == self.releases.get()
    }
}

/// How a fake instance answers `main_window_handle`.
#[derive(Debug, Clone, Copy)]
pub enum Hwnd {
    Absent,
    Fails,
    Raw(isize),
}

/// One registry entry and the instance behind it.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub resource: Option<String>,
    pub stale: bool,
    pub traversal_fails: bool,
    pub has_window: bool,
    pub activate_fails: bool,
    pub hwnd: Hwnd,
}

impl Entry {
    pub fn new(name: &str, resource: &str) -> Self {
        Self {
            name: name.to_string(),
            resource: Some(resource.to_string()),
            stale: false,
            traversal_fails: false,
            has_window: true,
            activate_fails: false,
            hwnd: Hwnd::Raw(0x1234),
        }
    }

    pub fn vs(id: u32, resource: &str) -> Self {
        Self::new(&format!("!VisualStudio.DTE.18.0:{id}"), resource)
    }

    pub fn foreign(name: &str) -> Self {
        Self::new(name, "C:\\other\\thing.doc")
    }

    pub fn without_resource(mut self) -> Self {
        self.resource = None;
        self
    }

    pub fn stale(mut self) -> Self {
        self.stale = true;
        self
    }

    pub fn traversal_fails(mut self) -> Self {
        self.traversal_fails = true;
        self
    }

    pub fn without_window(mut self) -> Self {
        self.has_window = false;
        self
    }

    pub fn activate_fails(mut self) -> Self {
        self.activate_fails = true;
        self
    }

    pub fn hwnd(mut self, hwnd: Hwnd) -> Self {
        self.hwnd = hwnd;
        self
    }
}

/// A fake object table. `fail_every` makes every Nth bind go stale and every
/// Nth resource lookup fail, counted independently.
#[derive(Debug, Default)]
pub struct FakeRegistry {
    pub ledger: Rc<Ledger>,
    pub entries: Vec<Entry>,
    pub unavailable: bool,
    pub enumerate_fails: bool,
    pub fail_every: Option<usize>,
    pub lookups: Rc<Cell<usize>>,
}

impl FakeRegistry {
    pub fn with(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

pub struct FakeTable {
    ledger: Rc<Ledger>,
    entries: Vec<Entry>,
    enumerate_fails: bool,
    fail_every: Option<usize>,
    attempts: Cell<usize>,
    lookups: Rc<Cell<usize>>,
}

impl Registry for FakeRegistry {
    type Table = FakeTable;

    fn acquire(&self) -> Result<Self::Table> {
        if self.unavailable {
            bail!("GetRunningObjectTable failed: 0x80004005");
        }
        Ok(FakeTable {
            ledger: Rc::clone(&self.ledger),
            entries: self.entries.clone(),
            enumerate_fails: self.enumerate_fails,
            fail_every: self.fail_every,
            attempts: Cell::new(0),
            lookups: Rc::clone(&self.lookups),
        })
    }
}

impl RegistryTable for FakeTable {
    type Handle = usize;
    type Object = FakeObject;
    type Entries = std::vec::IntoIter<Candidate<usize>>;

    fn enumerate(&self) -> Result<Self::Entries> {
        if self.enumerate_fails {
            bail!("EnumRunning failed");
        }
        let candidates: Vec<_> = self
            .entries
            .iter()
            .enumerate()
            .map(|(handle, entry)| Candidate {
                name: entry.name.clone(),
                handle,
            })
            .collect();
        Ok(candidates.into_iter())
    }

    fn bind(&self, candidate: &Candidate<usize>) -> Option<FakeObject> {
        let entry = self.entries[candidate.handle].clone();
        let attempt = self.attempts.get() + 1;
        self.attempts.set(attempt);
        let injected = self.fail_every.is_some_and(|n| attempt % n == 0);
        if entry.stale || injected {
            return None;
        }

        let ledger = Rc::clone(&self.ledger);
        ledger.binds.set(ledger.binds.get() + 1);
        ledger.bound.borrow_mut().push(entry.name.clone());
        Some(FakeObject {
            entry,
            ledger,
            lookups: Rc::clone(&self.lookups),
            fail_every: self.fail_every,
        })
    }
}

#[derive(Debug)]
pub struct FakeObject {
    pub entry: Entry,
    ledger: Rc<Ledger>,
    lookups: Rc<Cell<usize>>,
    fail_every: Option<usize>,
}

impl LiveObject for FakeObject {
    fn resource_path(&self) -> Result<Option<String>> {
        let lookup = self.lookups.get() + 1;
        self.lookups.set(lookup);
        if self.entry.traversal_fails || self.fail_every.is_some_and(|n| lookup % n == 0) {
            bail!("Solution.FullName: object disposed");
        }
        Ok(self.entry.resource.clone())
    }

    fn activate_window(&self) -> Result<bool> {
        if !self.entry.has_window {
            return Ok(false);
        }
        if self.entry.activate_fails {
            bail!("MainWindow.Activate: call rejected");
        }
        self.ledger.activations.borrow_mut().push(self.entry.name.clone());
        Ok(true)
    }

    fn main_window_handle(&self) -> Result<Option<NativeWindow>> {
        match self.entry.hwnd {
            Hwnd::Absent => Ok(None),
            Hwnd::Fails => Err(anyhow!("MainWindow.HWnd: no such member")),
            Hwnd::Raw(raw) => Ok(NativeWindow::new(raw)),
        }
    }
}

impl Drop for FakeObject {
    fn drop(&mut self) {
        self.ledger.releases.set(self.ledger.releases.get() + 1);
    }
}

/// Records restore and foreground requests.
#[derive(Debug, Default)]
pub struct FakeWindows {
    pub restored: RefCell<Vec<isize>>,
    pub foregrounded: RefCell<Vec<isize>>,
    pub restore_fails: bool,
}

impl WindowSystem for FakeWindows {
    fn restore(&self, window: NativeWindow) -> Result<()> {
        if self.restore_fails {
            bail!("ShowWindowAsync failed");
        }
        self.restored.borrow_mut().push(window.get());
        Ok(())
    }

    fn bring_to_front(&self, window: NativeWindow) -> Result<()> {
        self.foregrounded.borrow_mut().push(window.get());
        Ok(())
    }
}

/// Records launches; optionally fails the spawn and/or the fallback.
#[derive(Debug, Default)]
pub struct FakeLauncher {
    pub spawns: RefCell<Vec<(PathBuf, bool)>>,
    pub fallbacks: RefCell<Vec<PathBuf>>,
    pub spawn_fails: bool,
    pub fallback_fails: bool,
    pub exit_code: Option<i32>,
}

impl Launcher for FakeLauncher {
    fn spawn(&self, _command: &LaunchCommand, target: &Path, wait: bool) -> io::Result<LaunchOutcome> {
        self.spawns.borrow_mut().push((target.to_path_buf(), wait));
        if self.spawn_fails {
            return Err(io::Error::new(io::ErrorKind::NotFound, "devenv.com not found"));
        }
        if wait {
            Ok(LaunchOutcome::Exited { code: self.exit_code })
        } else {
            Ok(LaunchOutcome::Detached { pid: 4242 })
        }
    }

    fn open_with_default(&self, target: &Path) -> io::Result<()> {
        self.fallbacks.borrow_mut().push(target.to_path_buf());
        if self.fallback_fails {
            return Err(io::Error::other("no application is associated"));
        }
        Ok(())
    }
}
