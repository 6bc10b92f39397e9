//! Filter types for task queries.

use super::TaskStatus;

/// Filter criteria for listing tasks.
///
/// The default filter matches the default view: soft-deleted tasks are
/// hidden unless `include_deleted` is set.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Include soft-deleted tasks in the listing
    pub include_deleted: bool,

    /// Restrict to a specific status
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Filter that includes every task regardless of status.
    pub fn all() -> Self {
        Self {
            include_deleted: true,
            status: None,
        }
    }

    /// Filter matching a single status.
    pub fn with_status(status: TaskStatus) -> Self {
        Self {
            include_deleted: status == TaskStatus::Deleted,
            status: Some(status),
        }
    }
}
