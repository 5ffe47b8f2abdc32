//! Handlers for the `/daily-tasks` resource: recurring-task CRUD,
//! per-date instance transitions, and the completion summary.
//!
//! Everything is scoped to the calling member.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tasklane_core::daily::{DailySummary, InstanceStatus};
use tasklane_core::error::CoreError;
use tasklane_core::types::DbId;
use tasklane_db::models::daily_task::{CreateDailyTask, InstanceDate, UpdateDailyTask};
use tasklane_db::repositories::DailyTaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /daily-tasks/summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    /// Calendar date (YYYY-MM-DD); defaults to today (UTC).
    pub date: Option<String>,
}

/// Today's calendar date in UTC, YYYY-MM-DD.
fn today() -> String {
    chrono::Utc::now().date_naive().to_string()
}

/// GET /api/v1/daily-tasks
pub async fn list_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tasks = DailyTaskRepo::list_for_member(&state.pool, &auth.member_id).await?;

    Ok(Json(DataResponse { data: tasks }))
}

/// POST /api/v1/daily-tasks
pub async fn create_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateDailyTask>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Daily task title must not be empty".into(),
        )));
    }

    let task = DailyTaskRepo::create(&state.pool, &auth.member_id, &input).await?;

    tracing::info!(task_id = %task.id, member_id = %auth.member_id, "Daily task created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// PUT /api/v1/daily-tasks/{id}
pub async fn update_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<UpdateDailyTask>,
) -> AppResult<impl IntoResponse> {
    let task = DailyTaskRepo::update(&state.pool, &task_id, &auth.member_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DailyTask",
            id: task_id,
        }))?;

    tracing::info!(task_id = %task.id, member_id = %auth.member_id, "Daily task updated");

    Ok(Json(DataResponse { data: task }))
}

/// DELETE /api/v1/daily-tasks/{id}
pub async fn delete_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DailyTaskRepo::delete(&state.pool, &task_id, &auth.member_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "DailyTask",
            id: task_id,
        }));
    }

    tracing::info!(task_id = %task_id, member_id = %auth.member_id, "Daily task deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Instance transitions
// ---------------------------------------------------------------------------

/// PUT /api/v1/daily-tasks/{id}/start
pub async fn start_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<InstanceDate>,
) -> AppResult<impl IntoResponse> {
    transition(&state, &auth, task_id, input, InstanceStatus::InProgress).await
}

/// PUT /api/v1/daily-tasks/{id}/complete
pub async fn complete_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<InstanceDate>,
) -> AppResult<impl IntoResponse> {
    transition(&state, &auth, task_id, input, InstanceStatus::Completed).await
}

/// PUT /api/v1/daily-tasks/{id}/skip
pub async fn skip_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<InstanceDate>,
) -> AppResult<impl IntoResponse> {
    transition(&state, &auth, task_id, input, InstanceStatus::Skipped).await
}

/// Upsert the instance for the given (task, date) to the target status.
/// At most one instance per pair; the unique index backstops the upsert.
async fn transition(
    state: &AppState,
    auth: &AuthUser,
    task_id: DbId,
    input: InstanceDate,
    status: InstanceStatus,
) -> AppResult<Json<DataResponse<tasklane_db::models::daily_task::DailyTaskInstance>>> {
    let task = DailyTaskRepo::find_for_member(&state.pool, &task_id, &auth.member_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DailyTask",
            id: task_id,
        }))?;

    let date = input.date.unwrap_or_else(today);

    let instance = DailyTaskRepo::upsert_instance(
        &state.pool,
        &task.id,
        &date,
        status,
        input.notes.as_deref(),
    )
    .await?;

    tracing::info!(
        task_id = %task.id,
        date = %instance.date,
        status = %instance.status,
        "Daily task instance updated"
    );

    Ok(Json(DataResponse { data: instance }))
}

/// GET /api/v1/daily-tasks/{id}/instances
///
/// Instance history, most recent date first.
pub async fn task_instances(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = DailyTaskRepo::find_for_member(&state.pool, &task_id, &auth.member_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DailyTask",
            id: task_id,
        }))?;

    let instances = DailyTaskRepo::instances(&state.pool, &task.id).await?;

    Ok(Json(DataResponse { data: instances }))
}

/// GET /api/v1/daily-tasks/summary?date=YYYY-MM-DD
///
/// Completion summary across the caller's active tasks whose start/end
/// window covers the date. Tasks without an instance count as pending.
pub async fn summary(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> AppResult<impl IntoResponse> {
    let date = params.date.unwrap_or_else(today);

    let counts = DailyTaskRepo::summary_counts(&state.pool, &auth.member_id, &date).await?;

    let summary = DailySummary::compute(
        date,
        counts.total_tasks,
        counts.completed,
        counts.in_progress,
        counts.skipped,
    );

    Ok(Json(DataResponse { data: summary }))
}
