//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::datetime::DurationLabel;
use crate::models::{Task, TaskRollup, TaskStatus};

/// Newtype wrapper for displaying the task collection.
///
/// Unlike the standalone [`Task`] Display (one task, full detail), the
/// list renders one compact line per task plus a rollup footer, and
/// handles the empty collection gracefully.
///
/// # Examples
///
/// ```rust
/// use fehrist_core::display::TaskList;
/// use fehrist_core::models::{Difficulty, Priority, Task, TaskStatus};
/// use jiff::Timestamp;
///
/// let task = Task {
///     id: "3f2504e0-4f89-41d3-9a0c-0305e82c3301".to_string(),
///     name: "Write report".to_string(),
///     description: None,
///     priority: Priority::High,
///     difficulty: Difficulty::Medium,
///     duration_minutes: 90,
///     status: TaskStatus::Added,
///     position: 0,
///     created_at: Timestamp::from_second(1640995200).unwrap(),
///     updated_at: Timestamp::from_second(1640995200).unwrap(),
/// };
///
/// let output = format!("{}", TaskList(vec![task]));
/// assert!(output.contains("Write report"));
/// assert!(output.contains("3f2504e0"));
/// ```
pub struct TaskList(pub Vec<Task>);

impl TaskList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the task at the given index.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for TaskList {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TaskList {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn status_mark(status: TaskStatus) -> char {
    match status {
        TaskStatus::Added => '○',
        TaskStatus::Completed => '✓',
        TaskStatus::Deleted => '✗',
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }

        for task in &self.0 {
            writeln!(
                f,
                "- {} **{}** ({} • {} • {}) `{}`",
                status_mark(task.status),
                task.name,
                task.priority,
                task.difficulty,
                DurationLabel(task.duration_minutes),
                task.short_id(),
            )?;
        }

        let rollup = TaskRollup::of(&self.0);
        writeln!(f)?;
        writeln!(
            f,
            "{} tasks • {} done • {} remaining",
            rollup.visible,
            rollup.completed,
            DurationLabel(rollup.remaining_minutes.min(u64::from(u32::MAX)) as u32),
        )?;

        Ok(())
    }
}
