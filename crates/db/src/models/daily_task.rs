//! Daily task and instance models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasklane_core::types::{DbId, Timestamp};

/// A row from the `daily_tasks` table: a recurring-task definition.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyTask {
    pub id: DbId,
    pub member_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub frequency: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// A row from the `daily_task_instances` table: at most one per
/// (task, calendar date).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyTaskInstance {
    pub id: DbId,
    pub task_id: DbId,
    pub date: String,
    pub status: String,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a daily task for the calling member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDailyTask {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `"daily"`.
    pub frequency: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// DTO for updating a daily task.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDailyTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for the start/complete/skip endpoints. Defaults to today (UTC).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstanceDate {
    pub date: Option<String>,
    pub notes: Option<String>,
}
