//! Task operations for the TaskStore.
//!
//! Each operation opens its own connection inside `spawn_blocking`, so the
//! async surface never blocks the runtime on SQLite I/O. Mutations are
//! atomic relative to each other; there is no shared connection state.

use tokio::task;

use super::TaskStore;
use crate::{
    db::Database,
    error::{Result, StoreError},
    models::{Task, TaskFilter},
    params::{CreateTask, Id, ListTasks, PurgeTask},
};

impl TaskStore {
    /// Adds a task to the end of the collection.
    ///
    /// The store assigns a fresh id and the Added status. Constraint
    /// violations (empty name, zero duration) are the caller's to reject
    /// via [`CreateTask::validate`] before invoking this; the store admits
    /// what it is given.
    pub async fn add_task(&self, params: &CreateTask) -> Result<Task> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_task(
                &params.name,
                params.description.as_deref(),
                params.priority,
                params.difficulty,
                params.duration_minutes,
            )
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a task by id or unambiguous id prefix.
    pub async fn get_task(&self, params: &Id) -> Result<Option<Task>> {
        let db_path = self.db_path.clone();
        let needle = params.id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            match db.resolve_task_id(&needle)? {
                Some(id) => db.get_task(&id),
                None => Ok(None),
            }
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists tasks in insertion order.
    ///
    /// The default listing hides soft-deleted tasks; `all` includes them.
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<Vec<Task>> {
        let db_path = self.db_path.clone();
        let filter = TaskFilter::from(params);

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_tasks(Some(&filter))
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Flips a task between Added and Completed.
    ///
    /// Returns `None` when the id does not resolve; an unknown id is a
    /// no-op, not an error.
    pub async fn toggle_complete(&self, params: &Id) -> Result<Option<Task>> {
        let db_path = self.db_path.clone();
        let needle = params.id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            match db.resolve_task_id(&needle)? {
                Some(id) => db.toggle_task(&id),
                None => Ok(None),
            }
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Soft-deletes a task (marks it Deleted, keeping the row).
    ///
    /// Returns `None` when the id does not resolve; an unknown id is a
    /// no-op, not an error.
    pub async fn delete_task(&self, params: &Id) -> Result<Option<Task>> {
        let db_path = self.db_path.clone();
        let needle = params.id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            match db.resolve_task_id(&needle)? {
                Some(id) => db.mark_deleted(&id),
                None => Ok(None),
            }
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently removes a task row. This operation cannot be undone.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` without confirmation and
    /// `StoreError::TaskNotFound` when the id does not resolve.
    pub async fn purge_task(&self, params: &PurgeTask) -> Result<Task> {
        if !params.confirmed {
            return Err(StoreError::invalid_input("confirmed")
                .with_reason("Purging is permanent; pass the confirmation flag to proceed"));
        }

        let db_path = self.db_path.clone();
        let needle = params.id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let id = db
                .resolve_task_id(&needle)?
                .ok_or_else(|| StoreError::TaskNotFound { id: needle.clone() })?;
            db.purge_task(&id)
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
