//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Tone of an operation status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Note,
    Error,
}

/// Wrapper type for displaying operation confirmation messages.
///
/// Notes cover the reported no-ops (toggling or deleting an id that does
/// not exist); errors are reserved for actual failures.
pub struct OperationStatus {
    message: String,
    tone: Tone,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            tone: Tone::Success,
        }
    }

    /// Create a neutral note, used for no-op outcomes.
    pub fn note(message: String) -> Self {
        Self {
            message,
            tone: Tone::Note,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            tone: Tone::Error,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.tone {
            Tone::Success => "Success:",
            Tone::Note => "Note:",
            Tone::Error => "Error:",
        };
        writeln!(f, "{} {}", prefix, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Operation completed".to_string());
        assert!(format!("{success}").contains("Success:"));

        let note = OperationStatus::note("Nothing to do".to_string());
        assert!(format!("{note}").contains("Note:"));

        let failure = OperationStatus::failure("Operation failed".to_string());
        assert!(format!("{failure}").contains("Error:"));
    }
}
