//! Handlers for board membership: listing, adding, role changes, removal.
//!
//! Listing requires the board-member guard; every mutation requires the
//! board-admin guard. The owner is an implicit admin with no row here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasklane_core::error::CoreError;
use tasklane_core::roles::{is_valid_role, ROLE_MEMBER};
use tasklane_core::types::DbId;
use tasklane_db::models::board::{AddBoardMember, UpdateBoardMemberRole};
use tasklane_db::repositories::{BoardMemberRepo, MemberRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::guards::{require_board_admin, require_board_member};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/boards/{id}/members
///
/// List board members joined with their profile, role, and join time.
pub async fn list_members(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_board_member(&state.pool, &board_id, &auth.member_id).await?;

    let members = BoardMemberRepo::list(&state.pool, &board_id).await?;

    Ok(Json(DataResponse { data: members }))
}

/// POST /api/v1/boards/{id}/members
///
/// Add a member to the board. Duplicate pair is a 400 conflict.
pub async fn add_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
    Json(input): Json<AddBoardMember>,
) -> AppResult<impl IntoResponse> {
    require_board_admin(&state.pool, &board_id, &auth.member_id).await?;

    let role = input.role.as_deref().unwrap_or(ROLE_MEMBER);
    if !is_valid_role(role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid role: {role}"
        ))));
    }

    // The target must be an existing member account.
    if MemberRepo::find_by_id(&state.pool, &input.member_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id: input.member_id,
        }));
    }

    if BoardMemberRepo::find(&state.pool, &board_id, &input.member_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Member is already a member of this board".into(),
        )));
    }

    let membership = BoardMemberRepo::add(&state.pool, &board_id, &input.member_id, role).await?;

    tracing::info!(
        board_id = %board_id,
        member_id = %membership.member_id,
        role = %membership.role,
        "Board member added"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: membership })))
}

/// PUT /api/v1/boards/{id}/members/{member_id}
///
/// Change a board member's role.
pub async fn update_member_role(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((board_id, member_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateBoardMemberRole>,
) -> AppResult<impl IntoResponse> {
    require_board_admin(&state.pool, &board_id, &auth.member_id).await?;

    if !is_valid_role(&input.role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid role: {}",
            input.role
        ))));
    }

    let membership = BoardMemberRepo::update_role(&state.pool, &board_id, &member_id, &input.role)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BoardMember",
            id: member_id,
        }))?;

    tracing::info!(
        board_id = %board_id,
        member_id = %membership.member_id,
        role = %membership.role,
        "Board member role updated"
    );

    Ok(Json(DataResponse { data: membership }))
}

/// DELETE /api/v1/boards/{id}/members/{member_id}
///
/// Remove a member from the board.
pub async fn remove_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((board_id, member_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    require_board_admin(&state.pool, &board_id, &auth.member_id).await?;

    let removed = BoardMemberRepo::remove(&state.pool, &board_id, &member_id).await?;

    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BoardMember",
            id: member_id,
        }));
    }

    tracing::info!(board_id = %board_id, member_id = %member_id, "Board member removed");

    Ok(StatusCode::NO_CONTENT)
}
