//! Task CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};
use uuid::Uuid;

use crate::{
    error::{DatabaseResultExt, Result, StoreError},
    models::{Difficulty, Priority, Task, TaskFilter, TaskStatus},
};

// Optimized SQL queries as const strings for compile-time optimization
const TASK_COLUMNS: &str = "id, name, description, priority, difficulty, duration_minutes, status, position, created_at, updated_at";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (id, name, description, priority, difficulty, duration_minutes, status, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const NEXT_POSITION_SQL: &str = "SELECT COALESCE(MAX(position) + 1, 0) FROM tasks";
const RESOLVE_EXACT_SQL: &str = "SELECT EXISTS(SELECT 1 FROM tasks WHERE id = ?1)";
const RESOLVE_PREFIX_SQL: &str = "SELECT id FROM tasks WHERE id LIKE ?1 || '%' ORDER BY id LIMIT 2";
const UPDATE_STATUS_SQL: &str = "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";

// Listing draws from one of two sources depending on whether soft-deleted
// tasks should appear
const VISIBLE_TASKS_VIEW: &str = "visible_tasks";
const ALL_TASKS_TABLE: &str = "tasks";

/// Map an integer column through a categorical TryFrom conversion.
fn categorical<T>(index: usize, raw: i64) -> rusqlite::Result<T>
where
    T: TryFrom<u8, Error = String>,
{
    u8::try_from(raw)
        .map_err(|e| e.to_string())
        .and_then(T::try_from)
        .map_err(|reason| {
            rusqlite::Error::FromSqlConversionFailure(
                index,
                Type::Integer,
                Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, reason)),
            )
        })
}

/// Parse a TEXT column holding an RFC 3339 timestamp.
fn timestamp(index: usize, raw: String) -> rusqlite::Result<Timestamp> {
    raw.parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        priority: categorical::<Priority>(3, row.get(3)?)?,
        difficulty: categorical::<Difficulty>(4, row.get(4)?)?,
        duration_minutes: row.get::<_, i64>(5)? as u32,
        status: categorical::<TaskStatus>(6, row.get(6)?)?,
        position: row.get::<_, i64>(7)? as u32,
        created_at: timestamp(8, row.get(8)?)?,
        updated_at: timestamp(9, row.get(9)?)?,
    })
}

impl super::Database {
    /// Inserts a new task at the end of the collection.
    ///
    /// A fresh UUID is assigned and the status starts as Added. The position
    /// column preserves insertion order for listings. Input validation is
    /// the caller's responsibility; the store admits what it is given.
    pub fn insert_task(
        &mut self,
        name: &str,
        description: Option<&str>,
        priority: Priority,
        difficulty: Difficulty,
        duration_minutes: u32,
    ) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let id = Uuid::new_v4().to_string();
        let now = Timestamp::now();
        let now_str = now.to_string();

        let position: i64 = tx
            .query_row(NEXT_POSITION_SQL, [], |row| row.get(0))
            .db_context("Failed to compute next task position")?;

        tx.execute(
            INSERT_TASK_SQL,
            params![
                &id,
                name,
                description,
                u8::from(priority),
                u8::from(difficulty),
                duration_minutes,
                u8::from(TaskStatus::Added),
                position,
                &now_str,
                &now_str,
            ],
        )
        .map_err(|e| StoreError::database_error("Failed to insert task", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Task {
            id,
            name: name.into(),
            description: description.map(String::from),
            priority,
            difficulty,
            duration_minutes,
            status: TaskStatus::Added,
            position: position as u32,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a task by its exact id.
    pub fn get_task(&self, id: &str) -> Result<Option<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| StoreError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id], task_from_row)
            .optional()
            .map_err(|e| StoreError::database_error("Failed to query task", e))
    }

    /// Resolves an id or unambiguous id prefix to a full task id.
    ///
    /// Exact matches always win. A prefix matching more than one task is an
    /// input error; a prefix matching nothing resolves to `None`.
    pub fn resolve_task_id(&self, needle: &str) -> Result<Option<String>> {
        let exact: bool = self
            .connection
            .query_row(RESOLVE_EXACT_SQL, params![needle], |row| row.get(0))
            .db_context("Failed to check task existence")?;
        if exact {
            return Ok(Some(needle.to_string()));
        }

        let mut stmt = self
            .connection
            .prepare(RESOLVE_PREFIX_SQL)
            .map_err(|e| StoreError::database_error("Failed to prepare query", e))?;
        let ids: Vec<String> = stmt
            .query_map(params![needle], |row| row.get(0))
            .db_context("Failed to resolve task id")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch matching ids")?;

        match ids.len() {
            0 => Ok(None),
            1 => Ok(ids.into_iter().next()),
            _ => Err(StoreError::invalid_input("id")
                .with_reason(format!("Id prefix '{needle}' matches more than one task"))),
        }
    }

    /// Lists tasks in insertion order with optional filtering.
    pub fn list_tasks(&self, filter: Option<&TaskFilter>) -> Result<Vec<Task>> {
        let include_deleted = filter.is_some_and(|f| f.include_deleted);
        let source = if include_deleted {
            ALL_TASKS_TABLE
        } else {
            VISIBLE_TASKS_VIEW
        };

        let mut sql = format!("SELECT {TASK_COLUMNS} FROM {source}");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(status) = filter.and_then(|f| f.status) {
            sql.push_str(" WHERE status = ?");
            params_vec.push(Box::new(u8::from(status)));
        }

        sql.push_str(" ORDER BY position ASC");

        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| StoreError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let tasks = stmt
            .query_map(&params_refs[..], task_from_row)
            .map_err(|e| StoreError::database_error("Failed to query tasks", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| StoreError::database_error("Failed to fetch tasks", e));
        tasks
    }

    /// Flips a task between Added and Completed.
    ///
    /// Returns the updated task, or `None` when the id does not exist.
    /// Soft-deleted tasks are left untouched and returned as-is.
    pub fn toggle_task(&mut self, id: &str) -> Result<Option<Task>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
        let task = tx
            .query_row(&sql, params![id], task_from_row)
            .optional()
            .map_err(|e| StoreError::database_error("Failed to query task", e))?;

        let Some(mut task) = task else {
            return Ok(None);
        };

        let next = task.status.toggled();
        if next != task.status {
            let now = Timestamp::now();
            tx.execute(
                UPDATE_STATUS_SQL,
                params![u8::from(next), now.to_string(), id],
            )
            .map_err(|e| StoreError::database_error("Failed to toggle task", e))?;
            task.status = next;
            task.updated_at = now;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(Some(task))
    }

    /// Soft-deletes a task by marking it Deleted.
    ///
    /// The row is retained and hidden from the default listing. Returns the
    /// updated task, or `None` when the id does not exist.
    pub fn mark_deleted(&mut self, id: &str) -> Result<Option<Task>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let rows_affected = tx
            .execute(
                UPDATE_STATUS_SQL,
                params![u8::from(TaskStatus::Deleted), now.to_string(), id],
            )
            .map_err(|e| StoreError::database_error("Failed to delete task", e))?;

        if rows_affected == 0 {
            return Ok(None);
        }

        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
        let task = tx
            .query_row(&sql, params![id], task_from_row)
            .optional()
            .map_err(|e| StoreError::database_error("Failed to query deleted task", e))?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(task)
    }

    /// Permanently removes a task row. This operation cannot be undone.
    pub fn purge_task(&mut self, id: &str) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
        let task = tx
            .query_row(&sql, params![id], task_from_row)
            .optional()
            .map_err(|e| StoreError::database_error("Failed to query task", e))?
            .ok_or_else(|| StoreError::TaskNotFound { id: id.to_string() })?;

        tx.execute(DELETE_TASK_SQL, params![id])
            .map_err(|e| StoreError::database_error("Failed to purge task", e))?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(task)
    }
}
