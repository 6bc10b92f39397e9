//! Plan rendering with task names resolved from the store.
//!
//! The plan wire format references tasks by id. This wrapper joins the
//! plan against the current task collection so work blocks show task
//! names, numbering only the work blocks ("Focus Sprint n") the way the
//! plan view presents them.

use std::collections::HashMap;
use std::fmt;

use super::datetime::DurationLabel;
use crate::models::{BlockType, Plan, Task};

/// A plan paired with the task collection it references.
pub struct RenderedPlan<'a> {
    plan: &'a Plan,
    tasks_by_id: HashMap<&'a str, &'a Task>,
}

impl<'a> RenderedPlan<'a> {
    /// Pair a plan with the tasks it references.
    pub fn new(plan: &'a Plan, tasks: &'a [Task]) -> Self {
        Self {
            plan,
            tasks_by_id: tasks.iter().map(|t| (t.id.as_str(), t)).collect(),
        }
    }

    fn task_label(&self, id: &str) -> String {
        match self.tasks_by_id.get(id) {
            Some(task) => format!("{} ({})", task.name, DurationLabel(task.duration_minutes)),
            // The service only ever echoes submitted ids, but render
            // something sensible if the collection changed underneath us
            None => id.to_string(),
        }
    }
}

impl fmt::Display for RenderedPlan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Your Game Plan")?;
        writeln!(f)?;
        writeln!(
            f,
            "{} steps • {} total",
            self.plan.total_blocks,
            DurationLabel(self.plan.total_duration_minutes)
        )?;

        if let Some(explanation) = &self.plan.variation_explanation {
            writeln!(f)?;
            writeln!(f, "{explanation}")?;
        }

        let mut sprint = 0u32;
        for block in &self.plan.blocks {
            writeln!(f)?;
            match block.kind {
                BlockType::Work => {
                    sprint += 1;
                    writeln!(
                        f,
                        "## Focus Sprint {sprint} ({})",
                        DurationLabel(block.duration_minutes)
                    )?;
                    for id in &block.tasks {
                        write!(f, "- {}", self.task_label(id))?;
                        match block
                            .split_info
                            .as_ref()
                            .filter(|s| s.original_task_id == *id)
                        {
                            Some(split) => {
                                writeln!(f, " (part {} of {})", split.part, split.total_parts)?
                            }
                            None => writeln!(f)?,
                        }
                    }
                }
                BlockType::Break => {
                    writeln!(f, "## Break ({})", DurationLabel(block.duration_minutes))?;
                    writeln!(f, "- Step away and recharge")?;
                }
            }
        }

        Ok(())
    }
}
