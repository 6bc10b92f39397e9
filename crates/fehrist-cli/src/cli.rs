//! Command definitions and handlers.
//!
//! This module implements the parameter wrapper pattern: each command has
//! a clap argument struct that converts into the framework-free core
//! parameter type via `From`. CLI concerns (flags, help text, value
//! parsing) stay here; validation and business logic stay in the core.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Store / Client
//! ```

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use fehrist_core::{
    params::{CreateTask, Id, ListTasks, PurgeTask},
    CreateResult, DeleteResult, Difficulty, LoadingGate, OperationStatus, PlanClient, Priority,
    PurgeResult, RenderedPlan, RequestKind, Session, TaskList, TaskStore, UpdateResult,
    DEFAULT_RANDOMNESS,
};
use log::info;

use crate::loading;
use crate::renderer::TerminalRenderer;

/// Add a task to the list
///
/// The name must be non-empty and the duration a positive number of
/// minutes; both are checked before the store is touched, mirroring the
/// form-level validation of the original interface.
#[derive(Args)]
pub struct AddTaskArgs {
    /// Name of the task
    pub name: String,
    /// Optional free-text description
    #[arg(short, long, help = "Optional description providing more context")]
    pub description: Option<String>,
    /// Priority of the task
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
    pub priority: PriorityArg,
    /// Difficulty of the task
    #[arg(short = 'D', long, value_enum, default_value_t = DifficultyArg::Medium)]
    pub difficulty: DifficultyArg,
    /// Estimated duration in minutes
    #[arg(short = 't', long)]
    pub duration: u32,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            name: val.name,
            description: val.description,
            priority: val.priority.into(),
            difficulty: val.difficulty.into(),
            duration_minutes: val.duration,
        }
    }
}

/// List tasks
///
/// The default listing hides soft-deleted tasks; use --all to include
/// them.
#[derive(Args, Default)]
pub struct ListTasksArgs {
    /// Include soft-deleted tasks
    #[arg(long, help = "Include soft-deleted tasks in the listing")]
    pub all: bool,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            all: val.all,
            status: None,
        }
    }
}

/// Toggle a task between added and completed
#[derive(Args)]
pub struct ToggleTaskArgs {
    /// Id (or unambiguous id prefix) of the task to toggle
    #[arg(help = "Id or unambiguous id prefix of the task")]
    pub id: String,
}

impl From<ToggleTaskArgs> for Id {
    fn from(val: ToggleTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a task (soft delete)
///
/// The task is marked deleted and hidden from the default listing; the
/// row is kept. Use `purge` to remove it permanently.
#[derive(Args)]
pub struct DeleteTaskArgs {
    /// Id (or unambiguous id prefix) of the task to delete
    #[arg(help = "Id or unambiguous id prefix of the task")]
    pub id: String,
}

impl From<DeleteTaskArgs> for Id {
    fn from(val: DeleteTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Permanently remove a task
#[derive(Args)]
pub struct PurgeTaskArgs {
    /// Id (or unambiguous id prefix) of the task to purge
    #[arg(help = "Id or unambiguous id prefix of the task")]
    pub id: String,
    /// Confirm the removal (required to prevent accidents)
    #[arg(long)]
    pub confirm: bool,
}

impl From<PurgeTaskArgs> for PurgeTask {
    fn from(val: PurgeTaskArgs) -> Self {
        PurgeTask {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Request a fresh game plan for the current task list
#[derive(Args)]
pub struct GeneratePlanArgs {}

/// Request a new variation of the game plan
#[derive(Args)]
pub struct RegeneratePlanArgs {
    /// How far the service may perturb the arrangement (0 to 1)
    #[arg(long, default_value_t = DEFAULT_RANDOMNESS)]
    pub randomness: f64,
}

/// Start the HTTP relay server
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,
    /// Port to listen on
    #[arg(long, default_value_t = 8787)]
    pub port: u16,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a plan for the current task list
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
    /// Regenerate a variation of the plan
    #[command(alias = "r")]
    Regenerate(RegeneratePlanArgs),
}

/// Command-line argument representation of task priorities
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PriorityArg {
    /// Can wait
    Low,
    /// Normal urgency
    Medium,
    /// Should happen first
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

impl std::fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityArg::Low => write!(f, "low"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::High => write!(f, "high"),
        }
    }
}

/// Command-line argument representation of task difficulties
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DifficultyArg {
    /// Light effort
    Easy,
    /// Ordinary effort
    Medium,
    /// Demanding effort
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(val: DifficultyArg) -> Self {
        match val {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

impl std::fmt::Display for DifficultyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyArg::Easy => write!(f, "easy"),
            DifficultyArg::Medium => write!(f, "medium"),
            DifficultyArg::Hard => write!(f, "hard"),
        }
    }
}

/// Command dispatcher holding the store and renderer.
pub struct Cli {
    store: TaskStore,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command dispatcher.
    pub fn new(store: TaskStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Handle `fehrist add`.
    pub async fn handle_add(&self, args: AddTaskArgs) -> Result<()> {
        let params: CreateTask = args.into();
        params.validate()?;

        let task = self.store.add_task(&params).await?;
        info!("Added task {}", task.id);
        self.renderer.render(&CreateResult::new(task).to_string())
    }

    /// Handle `fehrist list`.
    pub async fn handle_list(&self, args: ListTasksArgs) -> Result<()> {
        let params: ListTasks = args.into();
        let tasks = self.store.list_tasks(&params).await?;

        let mut output = String::from("# Tasks\n\n");
        output.push_str(&TaskList(tasks).to_string());
        self.renderer.render(&output)
    }

    /// Handle `fehrist toggle`.
    pub async fn handle_toggle(&self, args: ToggleTaskArgs) -> Result<()> {
        let params: Id = args.into();
        match self.store.toggle_complete(&params).await? {
            Some(task) => {
                let change = format!("Marked {}", task.status);
                self.renderer
                    .render(&UpdateResult::with_changes(task, vec![change]).to_string())
            }
            None => self.renderer.render(
                &OperationStatus::note(format!(
                    "No task matches id '{}'; nothing to toggle",
                    params.id
                ))
                .to_string(),
            ),
        }
    }

    /// Handle `fehrist delete`.
    pub async fn handle_delete(&self, args: DeleteTaskArgs) -> Result<()> {
        let params: Id = args.into();
        match self.store.delete_task(&params).await? {
            Some(task) => self.renderer.render(&DeleteResult::new(task).to_string()),
            None => self.renderer.render(
                &OperationStatus::note(format!(
                    "No task matches id '{}'; nothing to delete",
                    params.id
                ))
                .to_string(),
            ),
        }
    }

    /// Handle `fehrist purge`.
    pub async fn handle_purge(&self, args: PurgeTaskArgs) -> Result<()> {
        let params: PurgeTask = args.into();
        let task = self.store.purge_task(&params).await?;
        self.renderer.render(&PurgeResult::new(task).to_string())
    }

    /// Handle `fehrist plan generate|regenerate`.
    pub async fn handle_plan_command(
        &self,
        command: PlanCommands,
        client: PlanClient,
    ) -> Result<()> {
        match command {
            PlanCommands::Generate(_) => {
                self.run_plan(client, RequestKind::Generate, DEFAULT_RANDOMNESS)
                    .await
            }
            PlanCommands::Regenerate(args) => {
                self.run_plan(client, RequestKind::Regenerate, args.randomness)
                    .await
            }
        }
    }

    async fn run_plan(&self, client: PlanClient, kind: RequestKind, randomness: f64) -> Result<()> {
        let tasks = self.store.list_tasks(&ListTasks::default()).await?;
        if tasks.is_empty() {
            anyhow::bail!("No tasks to plan. Add tasks before requesting a game plan.");
        }

        let mut session = Session::new();
        let mut gate = LoadingGate::new();

        let plan = loading::run_plan_flow(
            &self.renderer,
            &mut session,
            &mut gate,
            &client,
            tasks.clone(),
            kind,
            randomness,
        )
        .await?;

        match plan {
            Some(plan) => self
                .renderer
                .render(&RenderedPlan::new(&plan, &tasks).to_string()),
            None => match session.plan_error() {
                Some(message) => {
                    self.renderer
                        .render(&OperationStatus::failure(message.to_string()).to_string())?;
                    anyhow::bail!("{message}");
                }
                // Redirected navigation is silent
                None => Ok(()),
            },
        }
    }
}
