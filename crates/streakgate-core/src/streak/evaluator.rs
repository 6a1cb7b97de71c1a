//! Daily streak evaluation.
//!
//! Classifies today's progress toward the daily goal and renders the
//! user-facing status line. Day-window boundaries and lateness are decided
//! by the caller; nothing here reads a clock.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Streak state for the current day-window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StreakStatus {
    /// Goal met (or exceeded) for today
    Secured,
    /// Goal unmet and the day-window is closing
    AtRisk { remaining: u32 },
    /// Goal unmet, still time left
    InProgress { remaining: u32 },
}

impl StreakStatus {
    /// Actions still required today. Zero once secured.
    pub fn remaining(&self) -> u32 {
        match self {
            StreakStatus::Secured => 0,
            StreakStatus::AtRisk { remaining } | StreakStatus::InProgress { remaining } => {
                *remaining
            }
        }
    }

    /// Whether the message should be framed as a warning
    pub fn is_urgent(&self) -> bool {
        matches!(self, StreakStatus::AtRisk { .. })
    }

    /// Whether today's goal has been met
    pub fn is_secured(&self) -> bool {
        matches!(self, StreakStatus::Secured)
    }

    /// User-facing status message
    pub fn message(&self) -> String {
        match self {
            StreakStatus::Secured => "Streak secured for today! Keep it up.".to_string(),
            StreakStatus::AtRisk { remaining } => {
                format!("Only {remaining} left today. Act now or your streak ends!")
            }
            StreakStatus::InProgress { remaining } => {
                format!("{remaining} more to go today to keep your streak alive.")
            }
        }
    }
}

/// Classify today's progress. First match wins: meeting the goal always
/// overrides lateness.
pub fn classify(completed_count: u32, goal: u32, is_late: bool) -> StreakStatus {
    if completed_count >= goal {
        return StreakStatus::Secured;
    }

    // completed_count < goal here, so remaining >= 1
    let remaining = goal - completed_count;
    if is_late {
        StreakStatus::AtRisk { remaining }
    } else {
        StreakStatus::InProgress { remaining }
    }
}

/// Produce the status message for today's progress.
///
/// `goal` must be positive; a zero goal is a caller contract violation and
/// reports the streak as secured.
pub fn evaluate(completed_count: u32, goal: u32, is_late: bool) -> String {
    classify(completed_count, goal, is_late).message()
}

/// Today's progress as handed over by the day-window collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakProgress {
    /// Qualifying actions performed in the current day-window
    pub completed_count: u32,
    /// Actions required to preserve the streak today
    pub goal: u32,
    /// Whether the day-window is near its end
    pub is_late: bool,
}

impl StreakProgress {
    /// Build progress, rejecting a zero goal.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] when `goal` is zero.
    pub fn new(completed_count: u32, goal: u32, is_late: bool) -> Result<Self, ValidationError> {
        if goal == 0 {
            return Err(ValidationError::InvalidValue {
                field: "goal".to_string(),
                message: "daily goal must be positive".to_string(),
            });
        }
        Ok(Self {
            completed_count,
            goal,
            is_late,
        })
    }

    pub fn status(&self) -> StreakStatus {
        classify(self.completed_count, self.goal, self.is_late)
    }

    pub fn message(&self) -> String {
        self.status().message()
    }
}
