//! Wire payloads for the plan service.
//!
//! The service's task shape is narrower than the stored [`Task`]: no
//! position and no timestamps. These payload types define exactly what
//! crosses the wire so the stored model can evolve without changing the
//! service contract.

use serde::{Deserialize, Serialize};

use super::{Difficulty, Priority, Task, TaskStatus};

/// A task as the plan service sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub status: TaskStatus,
}

impl From<&Task> for TaskPayload {
    fn from(task: &Task) -> Self {
        TaskPayload {
            id: task.id.clone(),
            name: task.name.clone(),
            description: task.description.clone(),
            priority: task.priority,
            difficulty: task.difficulty,
            duration_minutes: task.duration_minutes,
            status: task.status,
        }
    }
}

/// Request body for `/plan/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub tasks: Vec<TaskPayload>,
}

impl GenerateRequest {
    /// Build the request body from stored tasks.
    pub fn new(tasks: &[Task]) -> Self {
        Self {
            tasks: tasks.iter().map(TaskPayload::from).collect(),
        }
    }
}

/// Request body for `/plan/regenerate`.
///
/// `randomness` is a client-supplied hint in [0, 1] controlling how far
/// the service may perturb the previous arrangement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegenerateRequest {
    pub tasks: Vec<TaskPayload>,
    pub randomness: f64,
}

impl RegenerateRequest {
    /// Build the request body from stored tasks and a randomness hint.
    pub fn new(tasks: &[Task], randomness: f64) -> Self {
        Self {
            tasks: tasks.iter().map(TaskPayload::from).collect(),
            randomness,
        }
    }
}
