//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, StoreError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early stores tracked created_at only; add updated_at where missing
        let has_updated_at: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('tasks') WHERE name = 'updated_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_updated_at {
            self.connection
                .execute(
                    "ALTER TABLE tasks ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .map_err(|e| {
                    StoreError::database_error("Failed to add updated_at column to tasks table", e)
                })?;
            self.connection
                .execute(
                    "UPDATE tasks SET updated_at = created_at WHERE updated_at = ''",
                    [],
                )
                .map_err(|e| {
                    StoreError::database_error("Failed to backfill updated_at column", e)
                })?;
        }

        Ok(())
    }
}
