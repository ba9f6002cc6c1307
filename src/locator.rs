use tracing::{debug, info, trace, warn};

use crate::path::NormalizedPath;
use crate::registry::{name_matches, LiveObject, Registry, RegistryTable};


/// Outcome of scanning the registry for a target resource.
#[derive(Debug)]
pub enum MatchResult<O> {
    /// A live instance already has the target open; the caller owns it.
    Found(O),
    /// No instance has the target open (or the registry was unavailable).
    NotFound,
}

/// A candidate that passed the name filter, bound, and reported a resource.
#[derive(Debug)]
pub struct Resolved<O> {
    /// Registration name of the entry.
    pub name: String,
    /// Resource path as reported by the instance.
    pub resource: String,
    /// Comparison key of `resource`.
    pub key: NormalizedPath,
    /// The bound object; released when this value is dropped.
    pub object: O,
}

/// Lazily filters, binds and resolves registry entries, one at a time.
///
/// Every per-candidate failure is logged and skipped. Objects that do not
/// make it into a yielded [`Resolved`] are released before the next entry is
/// probed.
pub struct Resolver<'a, T: RegistryTable> {
    table: &'a T,
    entries: T::Entries,
    prefix: &'a str,
}

impl<'a, T: RegistryTable> Resolver<'a, T> {
    /// Snapshot `table` and resolve entries whose name contains `prefix`.
    pub fn new(table: &'a T, prefix: &'a str) -> anyhow::Result<Self> {
        let entries = table.enumerate()?;
        Ok(Self { table, entries, prefix })
    }
}

impl<T: RegistryTable> Iterator for Resolver<'_, T> {
    type Item = Resolved<T::Object>;

    fn next(&mut self) -> Option<Self::Item> {
        for candidate in self.entries.by_ref() {
            if !name_matches(&candidate.name, self.prefix) {
                trace!(name = %candidate.name, "filtered out");
                continue;
            }
            debug!(name = %candidate.name, "registry entry");

            let Some(object) = self.table.bind(&candidate) else {
                debug!(name = %candidate.name, "entry went stale before bind");
                continue;
            };

            let resource = match object.resource_path() {
                Ok(Some(resource)) if !resource.is_empty() => resource,
                Ok(_) => {
                    debug!(name = %candidate.name, "no resource open");
                    continue;
                }
                Err(err) => {
                    debug!(name = %candidate.name, error = %format!("{err:#}"), "could not read resource path");
                    continue;
                }
            };

            let Some(key) = NormalizedPath::new(&resource) else {
                debug!(name = %candidate.name, %resource, "resource path cannot be normalized");
                continue;
            };
            debug!(name = %candidate.name, %resource, normalized = %key, "resolved");

            return Some(Resolved {
                name: candidate.name,
                resource,
                key,
                object,
            });
        }
        None
    }
}

/// Find the first live instance whose open resource normalizes to `target`.
///
/// Registry failures are logged and reported as [`MatchResult::NotFound`].
pub fn find_instance<R: Registry>(
    registry: &R,
    prefix: &str,
    target: &NormalizedPath,
) -> MatchResult<<R::Table as RegistryTable>::Object> {
    let table = match registry.acquire() {
        Ok(table) => table,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "running object table unavailable");
            return MatchResult::NotFound;
        }
    };
    let mut resolver = match Resolver::new(&table, prefix) {
        Ok(resolver) => resolver,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "could not enumerate running objects");
            return MatchResult::NotFound;
        }
    };

    let found = resolver.find(|resolved| {
        let same = resolved.key == *target;
        if !same {
            debug!(name = %resolved.name, "different resource");
        }
        same
    });

    match found {
        Some(resolved) => {
            info!(name = %resolved.name, resource = %resolved.resource, "found running instance");
            MatchResult::Found(resolved.object)
        }
        None => {
            debug!(%target, "no running instance has the target open");
            MatchResult::NotFound
        }
    }
}

/// Name and open resource of every live instance passing the name filter.
pub fn list_instances<R: Registry>(
    registry: &R,
    prefix: &str,
) -> crate::Result<Vec<(String, String)>> {
    let unavailable = |err: anyhow::Error| crate::Error::RegistryUnavailable(format!("{err:#}"));
    let table = registry.acquire().map_err(unavailable)?;
    let resolver = Resolver::new(&table, prefix).map_err(unavailable)?;
    Ok(resolver.map(|resolved| (resolved.name, resolved.resource)).collect())
}
