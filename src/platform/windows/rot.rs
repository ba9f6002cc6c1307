use anyhow::{Context, Result};
use tracing::debug;
use windows::core::Interface;
use windows::Win32::Foundation::S_OK;
use windows::Win32::System::Com::{
    CoTaskMemFree, CreateBindCtx, GetRunningObjectTable, IBindCtx, IDispatch, IEnumMoniker,
    IMoniker, IRunningObjectTable,
};

use super::com::Apartment;
use super::dispatch::DteInstance;
use crate::registry::{Candidate, Registry, RegistryTable};

/// The system running object table. Holds the COM apartment for as long as
/// it lives, so it must outlive every table and object acquired from it.
#[derive(Debug)]
pub struct RotRegistry {
    _apartment: Apartment,
}

impl RotRegistry {
    pub fn new() -> Self {
        Self {
            _apartment: Apartment::enter(),
        }
    }
}

impl Default for RotRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry for RotRegistry {
    type Table = RotTable;

    fn acquire(&self) -> Result<RotTable> {
        let rot = unsafe { GetRunningObjectTable(0) }.context("GetRunningObjectTable failed")?;
        let ctx = unsafe { CreateBindCtx(0) }.context("CreateBindCtx failed")?;
        Ok(RotTable { rot, ctx })
    }
}

#[derive(Debug)]
pub struct RotTable {
    rot: IRunningObjectTable,
    ctx: IBindCtx,
}

impl RegistryTable for RotTable {
    type Handle = IMoniker;
    type Object = DteInstance;
    type Entries = RotEntries;

    fn enumerate(&self) -> Result<RotEntries> {
        let monikers = unsafe { self.rot.EnumRunning() }.context("EnumRunning failed")?;
        Ok(RotEntries {
            monikers,
            ctx: self.ctx.clone(),
        })
    }

    fn bind(&self, candidate: &Candidate<IMoniker>) -> Option<DteInstance> {
        let unknown = match unsafe { self.rot.GetObject(&candidate.handle) } {
            Ok(unknown) => unknown,
            Err(err) => {
                debug!(name = %candidate.name, error = %err, "GetObject failed");
                return None;
            }
        };
        match unknown.cast::<IDispatch>() {
            Ok(dispatch) => Some(DteInstance::new(dispatch)),
            Err(err) => {
                debug!(name = %candidate.name, error = %err, "object is not automatable");
                None
            }
        }
    }
}

/// Monikers registered in the table, one at a time. Entries whose display
/// name cannot be read are skipped.
#[derive(Debug)]
pub struct RotEntries {
    monikers: IEnumMoniker,
    ctx: IBindCtx,
}

impl Iterator for RotEntries {
    type Item = Candidate<IMoniker>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut slot = [None];
            if unsafe { self.monikers.Next(&mut slot, None) } != S_OK {
                return None;
            }
            let moniker = slot[0].take()?;
            match display_name(&moniker, &self.ctx) {
                Ok(name) => {
                    return Some(Candidate {
                        name,
                        handle: moniker,
                    })
                }
                Err(err) => debug!(error = %format!("{err:#}"), "skipping moniker without a display name"),
            }
        }
    }
}

fn display_name(moniker: &IMoniker, ctx: &IBindCtx) -> Result<String> {
    let raw = unsafe { moniker.GetDisplayName(ctx, None) }.context("GetDisplayName failed")?;
    let name = unsafe { raw.to_string() };
    unsafe { CoTaskMemFree(Some(raw.0 as *const _)) };
    Ok(name?)
}
