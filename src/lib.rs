//! Reuse the running IDE instance that already has a solution open, or
//! launch a new one for it.

pub mod activate;
pub mod config;
pub mod error;
pub mod instance;
pub mod launcher;
pub mod locator;
pub mod path;
pub mod platform;
pub mod registry;
pub mod snapshot;
pub mod target;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{Error, Result};
pub use instance::{Instance, LocateSettings};
