//! Plan models returned by the external scheduling service.
//!
//! The plan is a derived, ephemeral value: the store holds the most recent
//! one for display and replaces it wholesale on every generate/regenerate
//! response. Nothing here is computed locally and nothing is persisted.
//!
//! Field names follow the service's camelCase JSON contract; the structs
//! decode the upstream response without reshaping it.

use serde::{Deserialize, Serialize};

/// An externally computed arrangement of tasks into work/break blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Ordered schedule segments
    pub blocks: Vec<PlanBlock>,

    /// Total scheduled minutes across all blocks
    pub total_duration_minutes: u32,

    /// Number of blocks in the plan
    pub total_blocks: u32,

    /// Whether the generator front-loaded a quick task
    #[serde(default)]
    pub quick_task_used: bool,

    /// Seed the generator used (regeneration responses only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_used: Option<u64>,

    /// Generator's explanation of how this variation differs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_explanation: Option<String>,
}

impl Plan {
    /// Task ids referenced by work blocks, in schedule order.
    pub fn referenced_task_ids(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .flat_map(|b| b.tasks.iter().map(String::as_str))
            .collect()
    }

    /// Number of work (non-break) blocks.
    pub fn work_block_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.kind == BlockType::Work)
            .count()
    }
}

/// One scheduled segment of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanBlock {
    /// Ordinal identifier within the plan
    pub block_id: u32,

    /// Focused work or a recharge break
    #[serde(rename = "type")]
    pub kind: BlockType,

    /// Segment length in minutes
    pub duration_minutes: u32,

    /// Task ids assigned to this block (empty for breaks)
    #[serde(default)]
    pub tasks: Vec<String>,

    /// Present when a single task was divided across blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_info: Option<SplitInfo>,
}

/// Type-safe enumeration of plan block kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Focused work segment
    Work,

    /// Recharge break segment
    Break,
}

impl BlockType {
    /// Convert to wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Work => "work",
            BlockType::Break => "break",
        }
    }
}

/// Marker that one task was divided across multiple work blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SplitInfo {
    /// Id of the task that was split
    pub original_task_id: String,

    /// 1-based part number of this segment
    pub part: u32,

    /// Total number of parts the task was split into
    pub total_parts: u32,
}
