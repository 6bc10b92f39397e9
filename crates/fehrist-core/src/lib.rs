//! Core library for the Fehrist task-planning application.
//!
//! This crate provides the business logic for capturing tasks and
//! requesting AI-generated game plans: the durable task store, the
//! transient session state, the plan-service client, the loading-gate
//! state machine, and the display formatting layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   View Layer    │    │   TaskStore     │    │    Database     │
//! │  (CLI, relay)   │───▶│  + Session      │───▶│   (SQLite)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │
//!          │              ┌─────────────────┐
//!          └─────────────▶│   PlanClient    │───▶ external service
//!                         └─────────────────┘
//! ```
//!
//! The task collection is the single writable source of truth: views
//! derive everything they render from store state and mutate it only
//! through the store's operations. Plans flow the other way: the external
//! service computes them, the session holds the latest one, and nothing
//! about a plan is ever persisted.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fehrist_core::{params::CreateTask, TaskStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TaskStoreBuilder::new()
//!     .with_database_path(Some("fehrist.db"))
//!     .build()
//!     .await?;
//!
//! let params = CreateTask {
//!     name: "Write report".to_string(),
//!     duration_minutes: 90,
//!     ..Default::default()
//! };
//! params.validate()?;
//! let task = store.add_task(&params).await?;
//! println!("Added: {}", task.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod db;
pub mod display;
pub mod error;
pub mod gate;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use client::{PlanClient, BACKEND_URL_ENV, DEFAULT_RANDOMNESS};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, PurgeResult, RenderedPlan, TaskList, UpdateResult,
};
pub use error::{Result, StoreError};
pub use gate::{GateDecision, GatePass, GateState, LoadingGate, RequestKind};
pub use models::{
    BlockType, Difficulty, Plan, PlanBlock, Priority, SplitInfo, Task, TaskFilter, TaskRollup,
    TaskStatus,
};
pub use params::{CreateTask, Id, ListTasks, PurgeTask};
pub use store::{Session, TaskStore, TaskStoreBuilder};
