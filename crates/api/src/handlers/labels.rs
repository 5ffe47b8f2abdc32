//! Handlers for the `/labels` resource and card-label associations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasklane_core::error::CoreError;
use tasklane_core::types::DbId;
use tasklane_db::models::label::{CreateLabel, UpdateLabel};
use tasklane_db::repositories::{CardRepo, LabelRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::guards::require_board_member;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Label CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/boards/{id}/labels
///
/// Create a label on a board. Board-member guard.
pub async fn create_label(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
    Json(input): Json<CreateLabel>,
) -> AppResult<impl IntoResponse> {
    require_board_member(&state.pool, &board_id, &auth.member_id).await?;

    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Label title must not be empty".into(),
        )));
    }

    let label = LabelRepo::create(&state.pool, &board_id, &input).await?;

    tracing::info!(label_id = %label.id, board_id = %board_id, "Label created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: label })))
}

/// PUT /api/v1/labels/{id}
pub async fn update_label(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(label_id): Path<DbId>,
    Json(input): Json<UpdateLabel>,
) -> AppResult<impl IntoResponse> {
    let label = LabelRepo::update(&state.pool, &label_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Label",
            id: label_id,
        }))?;

    tracing::info!(label_id = %label.id, member_id = %auth.member_id, "Label updated");

    Ok(Json(DataResponse { data: label }))
}

/// DELETE /api/v1/labels/{id}
///
/// Delete a label; its card associations cascade.
pub async fn delete_label(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(label_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = LabelRepo::delete(&state.pool, &label_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Label",
            id: label_id,
        }));
    }

    tracing::info!(label_id = %label_id, member_id = %auth.member_id, "Label deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Card-label associations
// ---------------------------------------------------------------------------

/// POST /api/v1/cards/{id}/labels/{label_id}
///
/// Attach a label to a card. The label must belong to the card's board;
/// attaching an already-attached label is a 400 conflict.
pub async fn attach_label(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((card_id, label_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let card = CardRepo::find_by_id(&state.pool, &card_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))?;

    let label = LabelRepo::find_by_id(&state.pool, &label_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Label",
            id: label_id,
        }))?;

    if label.board_id != card.board_id {
        return Err(AppError::Core(CoreError::Validation(
            "Label does not belong to the card's board".into(),
        )));
    }

    if LabelRepo::is_attached(&state.pool, &card.id, &label.id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Label is already attached to this card".into(),
        )));
    }

    LabelRepo::attach(&state.pool, &card.id, &label.id, &card.board_id).await?;

    tracing::info!(card_id = %card.id, label_id = %label.id, member_id = %auth.member_id, "Label attached");

    Ok((StatusCode::CREATED, Json(DataResponse { data: label })))
}

/// DELETE /api/v1/cards/{id}/labels/{label_id}
///
/// Detach a label from a card; 404 if it was not attached.
pub async fn detach_label(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((card_id, label_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let card = CardRepo::find_by_id(&state.pool, &card_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))?;

    let detached = LabelRepo::detach(&state.pool, &card.id, &label_id, &card.board_id).await?;

    if !detached {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Label",
            id: label_id,
        }));
    }

    tracing::info!(card_id = %card.id, label_id = %label_id, member_id = %auth.member_id, "Label detached");

    Ok(StatusCode::NO_CONTENT)
}
