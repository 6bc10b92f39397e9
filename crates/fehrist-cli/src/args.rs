use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddTaskArgs, DeleteTaskArgs, ListTasksArgs, PlanCommands, PurgeTaskArgs, ServeArgs,
    ToggleTaskArgs,
};

/// Main command-line interface for the Fehrist task planner
///
/// Fehrist captures tasks with priority, difficulty, and duration
/// estimates, then asks an external scheduling service for a "game plan"
/// that arranges them into focused work sprints and recharge breaks. The
/// task list is stored locally; plan generation requires a configured
/// backend service.
#[derive(Parser)]
#[command(version, about, name = "fehrist")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/fehrist/fehrist.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Base URL of the plan service. Defaults to $FEHRIST_BACKEND_URL
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Fehrist CLI
///
/// Task commands mutate the local store directly; `plan` commands send
/// the current task list to the scheduling service; `serve` exposes the
/// two relay endpoints over HTTP for other frontends.
#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the list
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Toggle a task between added and completed
    #[command(alias = "t")]
    Toggle(ToggleTaskArgs),
    /// Delete a task (soft delete; the row is kept)
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
    /// Permanently remove a task
    Purge(PurgeTaskArgs),
    /// Request a game plan from the scheduling service
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Start the HTTP relay server
    Serve(ServeArgs),
}
