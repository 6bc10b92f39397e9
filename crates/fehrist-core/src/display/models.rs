//! Display implementations for domain models.
//!
//! All Display implementations produce markdown for rich terminal
//! rendering. Collection and contextual formatting live in the sibling
//! modules; these are the standalone forms.

use std::fmt;

use super::datetime::{DurationLabel, LocalDateTime};
use crate::models::{BlockType, Difficulty, Plan, PlanBlock, Priority, Task, TaskStatus};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.name, self.status.with_icon())?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Id: {}", self.id)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Difficulty: {}", self.difficulty)?;
        writeln!(f, "- Duration: {}", DurationLabel(self.duration_minutes))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BlockType::Work => {
                writeln!(
                    f,
                    "## Block {} ({})",
                    self.block_id,
                    DurationLabel(self.duration_minutes)
                )?;
                for id in &self.tasks {
                    writeln!(f, "- {id}")?;
                }
            }
            BlockType::Break => {
                writeln!(
                    f,
                    "## Break ({})",
                    DurationLabel(self.duration_minutes)
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Your Game Plan")?;
        writeln!(f)?;
        writeln!(
            f,
            "{} steps • {} total",
            self.total_blocks,
            DurationLabel(self.total_duration_minutes)
        )?;

        if let Some(explanation) = &self.variation_explanation {
            writeln!(f)?;
            writeln!(f, "{explanation}")?;
        }

        writeln!(f)?;
        for block in &self.blocks {
            write!(f, "{block}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}
