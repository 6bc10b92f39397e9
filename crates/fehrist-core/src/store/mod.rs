//! High-level task store API.
//!
//! This module provides the main [`TaskStore`] interface: the single
//! writable source of truth for the task collection. Every view derives
//! its rendering from store state; no view layer holds an authoritative
//! copy of its own.
//!
//! Two kinds of state live behind different types here:
//!
//! - [`TaskStore`]: durable task collection, SQLite-backed, mutated
//!   through explicit async operations ([`task_ops`]).
//! - [`Session`]: transient per-process state: the current plan, the
//!   in-flight request flags, the last plan error, and the request
//!   sequence counter used to fence overlapping responses. Nothing in the
//!   session survives process exit.
//!
//! The store is an owned value, not a global: callers construct it via
//! [`TaskStoreBuilder`] and pass it by reference into the view layer.

use std::path::PathBuf;

pub mod builder;
pub mod session;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::TaskStoreBuilder;
pub use session::Session;

/// Main store interface for the durable task collection.
pub struct TaskStore {
    pub(crate) db_path: PathBuf,
}

impl TaskStore {
    /// Creates a new store with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
