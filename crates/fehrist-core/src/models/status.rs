//! Categorical enumerations for tasks.
//!
//! Priority, difficulty, and lifecycle status are ordinal scales that the
//! plan service expects as integers (1 to 3), so all three serialize as
//! their numeric code rather than a string name.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task priorities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    /// Can wait
    Low,

    /// Normal urgency
    #[default]
    Medium,

    /// Should happen first
    High,
}

impl From<Priority> for u8 {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            _ => Err(format!("Invalid priority code: {value}")),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to display string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Type-safe enumeration of task difficulties.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    /// Light effort
    Easy,

    /// Ordinary effort
    #[default]
    Medium,

    /// Demanding effort
    Hard,
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty code: {value}")),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    /// Convert to display string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Type-safe enumeration of task lifecycle statuses.
///
/// Deletion is a soft state: deleted tasks keep their row and are hidden
/// from the default listing instead of being removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    /// Task is captured and pending
    #[default]
    Added,

    /// Task has been completed
    Completed,

    /// Task is soft-deleted and hidden from the default view
    Deleted,
}

impl From<TaskStatus> for u8 {
    fn from(value: TaskStatus) -> Self {
        match value {
            TaskStatus::Added => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Deleted => 3,
        }
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TaskStatus::Added),
            2 => Ok(TaskStatus::Completed),
            3 => Ok(TaskStatus::Deleted),
            _ => Err(format!("Invalid task status code: {value}")),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "added" => Ok(TaskStatus::Added),
            "completed" => Ok(TaskStatus::Completed),
            "deleted" => Ok(TaskStatus::Deleted),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// Convert to display string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Added => "added",
            TaskStatus::Completed => "completed",
            TaskStatus::Deleted => "deleted",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fehrist_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Added.with_icon(), "○ Added");
    /// assert_eq!(TaskStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(TaskStatus::Deleted.with_icon(), "✗ Deleted");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Added => "○ Added",
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::Deleted => "✗ Deleted",
        }
    }

    /// The status reached by the toggle-complete operation.
    ///
    /// Added and Completed flip into each other; a deleted task stays
    /// deleted.
    pub fn toggled(&self) -> TaskStatus {
        match self {
            TaskStatus::Added => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Added,
            TaskStatus::Deleted => TaskStatus::Deleted,
        }
    }
}
