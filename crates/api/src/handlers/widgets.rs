//! Handlers for the `/widgets` resource: dashboard widget CRUD, batch
//! reorder, and the per-type data feeds.
//!
//! Every operation is scoped to the caller's own rows; another member's
//! widget id behaves like a missing row.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasklane_core::error::CoreError;
use tasklane_core::types::DbId;
use tasklane_db::models::widget::{CreateWidget, ReorderWidgets, UpdateWidget};
use tasklane_db::repositories::WidgetRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Row limit for the recent-activities feed.
const RECENT_ACTIVITIES_LIMIT: i64 = 10;

/// GET /api/v1/widgets
///
/// The caller's widgets ordered by position.
pub async fn list_widgets(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let widgets = WidgetRepo::list_for_member(&state.pool, &auth.member_id).await?;

    Ok(Json(DataResponse { data: widgets }))
}

/// POST /api/v1/widgets
pub async fn create_widget(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWidget>,
) -> AppResult<impl IntoResponse> {
    if input.widget_type.trim().is_empty() || input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Widget type and title must not be empty".into(),
        )));
    }

    let widget = WidgetRepo::create(&state.pool, &auth.member_id, &input).await?;

    tracing::info!(widget_id = %widget.id, member_id = %auth.member_id, "Widget created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: widget })))
}

/// PUT /api/v1/widgets/{id}
pub async fn update_widget(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(widget_id): Path<DbId>,
    Json(input): Json<UpdateWidget>,
) -> AppResult<impl IntoResponse> {
    let widget = WidgetRepo::update(&state.pool, &widget_id, &auth.member_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Widget",
            id: widget_id,
        }))?;

    tracing::info!(widget_id = %widget.id, member_id = %auth.member_id, "Widget updated");

    Ok(Json(DataResponse { data: widget }))
}

/// DELETE /api/v1/widgets/{id}
pub async fn delete_widget(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(widget_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WidgetRepo::delete(&state.pool, &widget_id, &auth.member_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Widget",
            id: widget_id,
        }));
    }

    tracing::info!(widget_id = %widget_id, member_id = %auth.member_id, "Widget deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/widgets/reorder
///
/// Batch position update. Ownership is enforced in the UPDATE's WHERE
/// clause, so a pair naming another member's widget is a silent no-op.
pub async fn reorder_widgets(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ReorderWidgets>,
) -> AppResult<impl IntoResponse> {
    WidgetRepo::reorder(&state.pool, &auth.member_id, &input.widgets).await?;

    tracing::info!(member_id = %auth.member_id, count = input.widgets.len(), "Widgets reordered");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/widgets/data/{widget_type}
///
/// Data feed for one widget type: `status_chart`, `recent_activities`,
/// or `gantt_chart`. Unknown types are a 400.
pub async fn widget_data(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(widget_type): Path<String>,
) -> AppResult<impl IntoResponse> {
    let data = match widget_type.as_str() {
        "status_chart" => to_value(WidgetRepo::status_counts(&state.pool, &auth.member_id).await?)?,
        "recent_activities" => to_value(
            WidgetRepo::recent_activities(&state.pool, &auth.member_id, RECENT_ACTIVITIES_LIMIT)
                .await?,
        )?,
        "gantt_chart" => to_value(WidgetRepo::gantt_cards(&state.pool, &auth.member_id).await?)?,
        other => {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown widget data type: {other}"
            ))));
        }
    };

    Ok(Json(DataResponse { data }))
}

/// Erase the feed's row type so the three feeds share one response shape.
fn to_value<T: serde::Serialize>(rows: T) -> AppResult<serde_json::Value> {
    serde_json::to_value(rows)
        .map_err(|e| AppError::InternalError(format!("Serialization error: {e}")))
}
