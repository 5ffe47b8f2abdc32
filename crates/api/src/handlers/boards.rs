//! Handlers for the `/boards` resource: CRUD, the full aggregate view,
//! and the board-level Gantt projection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasklane_core::error::CoreError;
use tasklane_core::types::DbId;
use tasklane_db::models::board::{CreateBoard, UpdateBoard};
use tasklane_db::repositories::BoardRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::guards::{require_board_admin, require_board_member};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/boards
///
/// List boards visible to the caller (public, owned, or member-of),
/// most recently active first.
pub async fn list_boards(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let boards = BoardRepo::list_visible(&state.pool, &auth.member_id).await?;

    Ok(Json(DataResponse { data: boards }))
}

/// POST /api/v1/boards
///
/// Create a board owned by the caller. No membership row is written;
/// ownership alone grants admin rights.
pub async fn create_board(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateBoard>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Board title must not be empty".into(),
        )));
    }

    let board = BoardRepo::create(&state.pool, &auth.member_id, &input).await?;

    tracing::info!(board_id = %board.id, owner_id = %auth.member_id, "Board created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: board })))
}

/// GET /api/v1/boards/{id}
///
/// The full board tree: lists with cards (labels and checklist resolved),
/// the board's labels, and its members. Assembled in one transaction.
pub async fn get_board(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let aggregate = BoardRepo::aggregate(&state.pool, &board_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Board",
            id: board_id,
        }))?;

    Ok(Json(DataResponse { data: aggregate }))
}

/// PUT /api/v1/boards/{id}
///
/// Update board fields. Board-member guard.
pub async fn update_board(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
    Json(input): Json<UpdateBoard>,
) -> AppResult<impl IntoResponse> {
    require_board_member(&state.pool, &board_id, &auth.member_id).await?;

    let board = BoardRepo::update(&state.pool, &board_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Board",
            id: board_id,
        }))?;

    tracing::info!(board_id = %board.id, member_id = %auth.member_id, "Board updated");

    Ok(Json(DataResponse { data: board }))
}

/// DELETE /api/v1/boards/{id}
///
/// Delete a board and everything under it. Board-admin guard.
pub async fn delete_board(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_board_admin(&state.pool, &board_id, &auth.member_id).await?;

    let deleted = BoardRepo::delete(&state.pool, &board_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Board",
            id: board_id,
        }));
    }

    tracing::info!(board_id = %board_id, member_id = %auth.member_id, "Board deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/boards/{id}/gantt
///
/// Flat scheduling view of the board's non-archived cards. Board-member
/// guard.
pub async fn board_gantt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_board_member(&state.pool, &board_id, &auth.member_id).await?;

    let rows = BoardRepo::gantt(&state.pool, &board_id).await?;

    Ok(Json(DataResponse { data: rows }))
}
