//! Parameter structures for Fehrist operations
//!
//! Shared parameter structures usable across interfaces (CLI, HTTP relay)
//! without framework-specific derives. Interface layers define their own
//! wrappers (clap argument structs, request payloads) and convert into
//! these via `From`/`Into`, keeping the core free of UI concerns.
//!
//! Validation lives here rather than in the store: the store's contract is
//! that constraint violations are rejected by the caller before a mutation
//! is invoked, so `CreateTask::validate` is the single chokepoint every
//! interface funnels through before touching the store.

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, Priority, TaskFilter, TaskStatus};

/// Generic parameters for operations requiring just a task id.
///
/// The id may be a full UUID or an unambiguous prefix; resolution happens
/// inside the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The id (or id prefix) of the task to operate on
    pub id: String,
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Display name of the task (required, non-empty)
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Priority on the low/medium/high scale
    pub priority: Priority,
    /// Difficulty on the easy/medium/hard scale
    pub difficulty: Difficulty,
    /// Positive effort estimate in minutes
    pub duration_minutes: u32,
}

impl CreateTask {
    /// Validate task creation parameters.
    ///
    /// # Errors
    ///
    /// * `StoreError::InvalidInput` - When the name is empty or whitespace
    /// * `StoreError::InvalidInput` - When the duration is zero
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::StoreError::InvalidInput {
                field: "name".to_string(),
                reason: "Task name must not be empty".to_string(),
            });
        }

        if self.duration_minutes == 0 {
            return Err(crate::StoreError::InvalidInput {
                field: "duration_minutes".to_string(),
                reason: "Duration must be a positive number of minutes".to_string(),
            });
        }

        Ok(())
    }
}

/// Parameters for listing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasks {
    /// Include soft-deleted tasks in the listing
    #[serde(default)]
    pub all: bool,
    /// Restrict the listing to a single status
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl From<&ListTasks> for TaskFilter {
    fn from(params: &ListTasks) -> Self {
        TaskFilter {
            include_deleted: params.all
                || params.status == Some(TaskStatus::Deleted),
            status: params.status,
        }
    }
}

/// Parameters for permanently removing a task.
///
/// Unlike `delete` (a soft status change), purging drops the row and
/// requires explicit confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurgeTask {
    /// The id (or id prefix) of the task to purge
    pub id: String,
    /// Confirmation flag (required to prevent accidental removal)
    #[serde(default)]
    pub confirmed: bool,
}
