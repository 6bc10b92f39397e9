//! Task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Difficulty, Priority, TaskStatus};

/// A user-authored unit of work.
///
/// Tasks are the only durable entity in the system. The `id` is an opaque
/// UUID string assigned at creation and never changed; `position` records
/// insertion order so listings are stable across reloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation
    pub id: String,

    /// Display name (validated non-empty before admission)
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Priority on the low/medium/high scale
    pub priority: Priority,

    /// Difficulty on the easy/medium/hard scale
    pub difficulty: Difficulty,

    /// Positive effort estimate in minutes
    pub duration_minutes: u32,

    /// Lifecycle status (added, completed, or soft-deleted)
    #[serde(default)]
    pub status: TaskStatus,

    /// Insertion position within the collection
    pub position: u32,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Task {
    /// Short id prefix used in listings.
    pub fn short_id(&self) -> &str {
        let end = self.id.len().min(8);
        &self.id[..end]
    }

    /// Whether the task appears in the default listing.
    pub fn is_visible(&self) -> bool {
        self.status != TaskStatus::Deleted
    }
}
