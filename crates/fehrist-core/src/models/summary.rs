//! Rollup summary over a task collection.

use super::{Task, TaskStatus};

/// Aggregate counts used in listing footers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskRollup {
    /// Tasks visible in the default listing (added + completed)
    pub visible: usize,

    /// Completed tasks among the visible ones
    pub completed: usize,

    /// Soft-deleted tasks retained in the store
    pub deleted: usize,

    /// Total estimated minutes across visible, uncompleted tasks
    pub remaining_minutes: u64,
}

impl TaskRollup {
    /// Compute the rollup for a task collection.
    pub fn of(tasks: &[Task]) -> Self {
        let mut rollup = TaskRollup::default();
        for task in tasks {
            match task.status {
                TaskStatus::Added => {
                    rollup.visible += 1;
                    rollup.remaining_minutes += u64::from(task.duration_minutes);
                }
                TaskStatus::Completed => {
                    rollup.visible += 1;
                    rollup.completed += 1;
                }
                TaskStatus::Deleted => rollup.deleted += 1,
            }
        }
        rollup
    }
}
