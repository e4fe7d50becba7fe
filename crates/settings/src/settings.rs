//! Configuration system for BTerm.
//!
//! Reads the btermrc key file, converts its entries into typed property
//! values, and reloads it when it changes on disk.

pub mod binder;
pub mod constants;
pub mod error;
pub mod file;
pub mod keyfile;
pub mod registry;
pub mod watcher;

#[cfg(test)]
mod test_support;

pub use binder::{apply, apply_all, BindReport, Binding};
pub use error::{CoercionError, ConfigIssue, LoadError, SyntaxError};
pub use file::{config_path, ensure_config_file, DEFAULT_CONFIG};
pub use keyfile::ConfigDocument;
pub use registry::{Configurable, EnumNicks, PropertyDescriptor, PropertyRegistry, Setter, ValueKind};
pub use watcher::{ConfigWatcher, WatchEvent, WatchState};
