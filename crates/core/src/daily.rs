//! Daily-task status model and the per-date completion summary.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status of one daily-task instance on a given calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceStatus {
    Pending,
    InProgress,
    Completed,
    Skipped,
}

impl InstanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InstanceStatus::Pending => "pending",
            InstanceStatus::InProgress => "in_progress",
            InstanceStatus::Completed => "completed",
            InstanceStatus::Skipped => "skipped",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(InstanceStatus::Pending),
            "in_progress" => Ok(InstanceStatus::InProgress),
            "completed" => Ok(InstanceStatus::Completed),
            "skipped" => Ok(InstanceStatus::Skipped),
            other => Err(CoreError::Validation(format!(
                "unknown instance status: {other}"
            ))),
        }
    }
}

/// Per-date completion summary across a member's active daily tasks.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    /// The summarized calendar date (YYYY-MM-DD).
    pub date: String,
    /// Active tasks whose start/end window covers the date.
    pub total_tasks: i64,
    pub completed: i64,
    pub in_progress: i64,
    pub skipped: i64,
    /// Tasks with no instance for the date count as pending.
    pub pending: i64,
    /// completed / total_tasks * 100, or 0.0 when there are no tasks.
    pub completion_rate: f64,
}

impl DailySummary {
    /// Build a summary from the task total and instance status counts.
    ///
    /// `total_tasks` is the number of active tasks in scope for the date;
    /// instance counts are for instances recorded on that date. Pending is
    /// derived so the four statuses always sum to `total_tasks`.
    pub fn compute(
        date: String,
        total_tasks: i64,
        completed: i64,
        in_progress: i64,
        skipped: i64,
    ) -> Self {
        let pending = (total_tasks - completed - in_progress - skipped).max(0);
        let completion_rate = if total_tasks > 0 {
            completed as f64 / total_tasks as f64 * 100.0
        } else {
            0.0
        };
        DailySummary {
            date,
            total_tasks,
            completed,
            in_progress,
            skipped,
            pending,
            completion_rate,
        }
    }
}
