//! Repository for the `daily_tasks` and `daily_task_instances` tables.
//!
//! A task has at most one instance per calendar date; start/complete/skip
//! upsert that date's instance. All operations are scoped to the owning
//! member.

use sqlx::SqlitePool;
use tasklane_core::daily::InstanceStatus;
use tasklane_core::types::new_id;

use crate::models::daily_task::{
    CreateDailyTask, DailyTask, DailyTaskInstance, UpdateDailyTask,
};
use crate::repositories::board_repo::NOW;

/// Column list for `daily_tasks` queries.
const TASK_COLUMNS: &str = "\
    id, member_id, title, description, frequency, start_date, end_date, is_active, created_at";

/// Column list for `daily_task_instances` queries.
const INSTANCE_COLUMNS: &str = "\
    id, task_id, date, status, started_at, completed_at, notes, created_at";

/// Per-status instance counts for one member and date.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstanceCounts {
    pub total_tasks: i64,
    pub completed: i64,
    pub in_progress: i64,
    pub skipped: i64,
}

/// Provides daily-task CRUD, instance upserts, and summary counts.
pub struct DailyTaskRepo;

impl DailyTaskRepo {
    pub async fn create(
        pool: &SqlitePool,
        member_id: &str,
        input: &CreateDailyTask,
    ) -> Result<DailyTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO daily_tasks \
             (id, member_id, title, description, frequency, start_date, end_date) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, DailyTask>(&query)
            .bind(new_id())
            .bind(member_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.frequency.as_deref().unwrap_or("daily"))
            .bind(&input.start_date)
            .bind(&input.end_date)
            .fetch_one(pool)
            .await
    }

    /// The member's tasks, oldest first.
    pub async fn list_for_member(
        pool: &SqlitePool,
        member_id: &str,
    ) -> Result<Vec<DailyTask>, sqlx::Error> {
        let query = format!(
            "SELECT {TASK_COLUMNS} FROM daily_tasks WHERE member_id = ? ORDER BY created_at"
        );
        sqlx::query_as::<_, DailyTask>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Find one of the member's tasks.
    pub async fn find_for_member(
        pool: &SqlitePool,
        id: &str,
        member_id: &str,
    ) -> Result<Option<DailyTask>, sqlx::Error> {
        let query = format!(
            "SELECT {TASK_COLUMNS} FROM daily_tasks WHERE id = ? AND member_id = ?"
        );
        sqlx::query_as::<_, DailyTask>(&query)
            .bind(id)
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        member_id: &str,
        input: &UpdateDailyTask,
    ) -> Result<Option<DailyTask>, sqlx::Error> {
        let query = format!(
            "UPDATE daily_tasks SET \
                title = COALESCE(?, title), \
                description = COALESCE(?, description), \
                frequency = COALESCE(?, frequency), \
                start_date = COALESCE(?, start_date), \
                end_date = COALESCE(?, end_date), \
                is_active = COALESCE(?, is_active) \
             WHERE id = ? AND member_id = ? \
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, DailyTask>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.frequency)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(input.is_active)
            .bind(id)
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the member's tasks. Its instances cascade.
    pub async fn delete(pool: &SqlitePool, id: &str, member_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM daily_tasks WHERE id = ? AND member_id = ?")
            .bind(id)
            .bind(member_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Upsert the instance for (task, date) to the given status.
    ///
    /// `started_at` is stamped when the task moves to in_progress and
    /// kept across later transitions (a completed instance still shows
    /// when it was started); `completed_at` is stamped on completion and
    /// cleared by any other transition.
    pub async fn upsert_instance(
        pool: &SqlitePool,
        task_id: &str,
        date: &str,
        status: InstanceStatus,
        notes: Option<&str>,
    ) -> Result<DailyTaskInstance, sqlx::Error> {
        let started = matches!(status, InstanceStatus::InProgress);
        let completed = matches!(status, InstanceStatus::Completed);

        let query = format!(
            "INSERT INTO daily_task_instances (id, task_id, date, status, started_at, completed_at, notes) \
             VALUES (?, ?, ?, ?, \
                     CASE WHEN ? THEN {NOW} END, \
                     CASE WHEN ? THEN {NOW} END, \
                     ?) \
             ON CONFLICT(task_id, date) DO UPDATE SET \
                status = excluded.status, \
                started_at = CASE WHEN excluded.started_at IS NOT NULL \
                                  THEN excluded.started_at ELSE started_at END, \
                completed_at = excluded.completed_at, \
                notes = COALESCE(excluded.notes, notes) \
             RETURNING {INSTANCE_COLUMNS}"
        );
        sqlx::query_as::<_, DailyTaskInstance>(&query)
            .bind(new_id())
            .bind(task_id)
            .bind(date)
            .bind(status.as_str())
            .bind(started)
            .bind(completed)
            .bind(notes)
            .fetch_one(pool)
            .await
    }

    /// Instance history for a task, most recent date first.
    pub async fn instances(
        pool: &SqlitePool,
        task_id: &str,
    ) -> Result<Vec<DailyTaskInstance>, sqlx::Error> {
        let query = format!(
            "SELECT {INSTANCE_COLUMNS} FROM daily_task_instances \
             WHERE task_id = ? ORDER BY date DESC"
        );
        sqlx::query_as::<_, DailyTaskInstance>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Counts feeding the per-date summary: the member's active tasks
    /// whose start/end window covers the date, and their instance
    /// statuses on that date. Tasks without an instance are pending by
    /// omission.
    pub async fn summary_counts(
        pool: &SqlitePool,
        member_id: &str,
        date: &str,
    ) -> Result<InstanceCounts, sqlx::Error> {
        let (total_tasks,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM daily_tasks \
             WHERE member_id = ?1 AND is_active = 1 \
               AND (start_date IS NULL OR start_date <= ?2) \
               AND (end_date IS NULL OR end_date >= ?2)",
        )
        .bind(member_id)
        .bind(date)
        .fetch_one(pool)
        .await?;

        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT i.status, COUNT(*) FROM daily_task_instances i \
             JOIN daily_tasks t ON t.id = i.task_id \
             WHERE t.member_id = ?1 AND t.is_active = 1 AND i.date = ?2 \
               AND (t.start_date IS NULL OR t.start_date <= ?2) \
               AND (t.end_date IS NULL OR t.end_date >= ?2) \
             GROUP BY i.status",
        )
        .bind(member_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        let mut counts = InstanceCounts {
            total_tasks,
            ..Default::default()
        };
        for (status, count) in rows {
            match status.as_str() {
                "completed" => counts.completed = count,
                "in_progress" => counts.in_progress = count,
                "skipped" => counts.skipped = count,
                // Explicit pending instances fold into the derived
                // pending bucket, so nothing to track here.
                _ => {}
            }
        }
        Ok(counts)
    }
}
