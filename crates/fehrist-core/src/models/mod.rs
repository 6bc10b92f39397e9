//! Data models for tasks and plans.
//!
//! This module contains the core domain models of the Fehrist system:
//! tasks the user captures, and the plan the external scheduling service
//! derives from them. Display implementations live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! Two model families with different ownership:
//!
//! - **Task** and its enumerations are owned here. Tasks are validated
//!   before admission, persisted durably, and mutated only through the
//!   store's operations.
//! - **Plan**, **PlanBlock**, and **SplitInfo** are owned by the external
//!   service. They are decoded, held for display, and replaced wholesale;
//!   nothing local computes or edits them.
//!
//! The wire contract is camelCase JSON with the ordinal enumerations
//! (priority, difficulty, status) encoded as integers 1 to 3; the
//! [`requests`] submodule defines the exact request payloads.

pub mod filters;
pub mod plan;
pub mod requests;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use filters::TaskFilter;
pub use plan::{BlockType, Plan, PlanBlock, SplitInfo};
pub use requests::{GenerateRequest, RegenerateRequest, TaskPayload};
pub use status::{Difficulty, Priority, TaskStatus};
pub use summary::TaskRollup;
pub use task::Task;
