//! Interview lifecycle stages
//!
//! Stages track where a session is in the interview lifecycle. They are
//! advisory state layered over the conversation: the full history is always
//! sent to the completion service regardless of stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The current stage of an interview session
///
/// Stages advance strictly forward:
/// `NotStarted → Opening → Analysis → Conclusion`
///
/// `Opening` is a transient micro-state: it is entered when the system
/// prompt is recorded and left as soon as the interviewer's opening
/// statement arrives. A session only remains in `Opening` if that first
/// completion fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStage {
    /// No case has been selected or started
    NotStarted,

    /// The system prompt is recorded; awaiting the opening statement
    Opening,

    /// The candidate is working the case turn by turn
    Analysis,

    /// The closing performance summary has been delivered (terminal)
    Conclusion,
}

impl fmt::Display for InterviewStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl InterviewStage {
    /// Returns a short label for the stage, suitable for UI display
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Opening => "Opening",
            Self::Analysis => "Analysis",
            Self::Conclusion => "Conclusion",
        }
    }

    /// Returns true if no further case turns are accepted
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Conclusion)
    }

    /// Returns true if the session accepts candidate turns
    pub fn accepts_turns(&self) -> bool {
        matches!(self, Self::Analysis)
    }
}

impl Default for InterviewStage {
    fn default() -> Self {
        Self::NotStarted
    }
}
