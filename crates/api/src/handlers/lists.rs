//! Handlers for the `/lists` resource and board-scoped list operations.
//!
//! Reordering validates the supplied id set against the board before
//! anything is written; a foreign or duplicated id rejects the set whole.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasklane_core::error::CoreError;
use tasklane_core::ordering::validate_reorder;
use tasklane_core::types::DbId;
use tasklane_db::models::board::ReorderLists;
use tasklane_db::models::list::{CreateList, UpdateList};
use tasklane_db::repositories::ListRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::guards::require_board_member;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/boards/{id}/lists
///
/// Create a list on a board. Board-member guard. Position defaults to one
/// past the board's current maximum.
pub async fn create_list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
    Json(input): Json<CreateList>,
) -> AppResult<impl IntoResponse> {
    require_board_member(&state.pool, &board_id, &auth.member_id).await?;

    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "List title must not be empty".into(),
        )));
    }

    let list = ListRepo::create(&state.pool, &board_id, &input).await?;

    tracing::info!(list_id = %list.id, board_id = %board_id, "List created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: list })))
}

/// PUT /api/v1/lists/{id}
pub async fn update_list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
    Json(input): Json<UpdateList>,
) -> AppResult<impl IntoResponse> {
    let list = ListRepo::update(&state.pool, &list_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        }))?;

    tracing::info!(list_id = %list.id, member_id = %auth.member_id, "List updated");

    Ok(Json(DataResponse { data: list }))
}

/// DELETE /api/v1/lists/{id}
///
/// Delete a list and its cards.
pub async fn delete_list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ListRepo::delete(&state.pool, &list_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        }));
    }

    tracing::info!(list_id = %list_id, member_id = %auth.member_id, "List deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/lists/{id}/archive
pub async fn archive_list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_archived(&state, &auth, list_id, true).await
}

/// PUT /api/v1/lists/{id}/restore
pub async fn restore_list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_archived(&state, &auth, list_id, false).await
}

async fn set_archived(
    state: &AppState,
    auth: &AuthUser,
    list_id: DbId,
    archived: bool,
) -> AppResult<Json<DataResponse<tasklane_db::models::list::List>>> {
    let list = ListRepo::set_archived(&state.pool, &list_id, archived)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        }))?;

    tracing::info!(list_id = %list.id, member_id = %auth.member_id, archived, "List archive state changed");

    Ok(Json(DataResponse { data: list }))
}

/// PUT /api/v1/boards/{id}/lists/reorder
///
/// Rewrite list positions to the index of each id in the supplied order.
/// Every supplied id must be one of the board's lists, with no duplicates
/// and at least one id; otherwise nothing is written and the request
/// fails with 400. Lists not named keep their current positions.
pub async fn reorder_lists(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
    Json(input): Json<ReorderLists>,
) -> AppResult<impl IntoResponse> {
    require_board_member(&state.pool, &board_id, &auth.member_id).await?;

    let existing = ListRepo::ids_for_board(&state.pool, &board_id).await?;
    validate_reorder(&input.list_ids, &existing)?;

    ListRepo::reorder(&state.pool, &board_id, &input.list_ids).await?;

    tracing::info!(board_id = %board_id, count = input.list_ids.len(), "Lists reordered");

    Ok(StatusCode::NO_CONTENT)
}
