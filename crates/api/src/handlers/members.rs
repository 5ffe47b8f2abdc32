//! Handlers for the `/members` resource (profile CRUD).
//!
//! Email and password are immutable here; accounts come from
//! registration.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasklane_core::error::CoreError;
use tasklane_core::types::DbId;
use tasklane_db::models::member::UpdateMember;
use tasklane_db::repositories::MemberRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/members
pub async fn list_members(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let members = MemberRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: members }))
}

/// GET /api/v1/members/{id}
pub async fn get_member(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let member = MemberRepo::find_by_id(&state.pool, &member_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id: member_id,
        }))?;

    Ok(Json(DataResponse { data: member }))
}

/// PUT /api/v1/members/{id}
pub async fn update_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
    Json(input): Json<UpdateMember>,
) -> AppResult<impl IntoResponse> {
    let member = MemberRepo::update(&state.pool, &member_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id: member_id,
        }))?;

    tracing::info!(member_id = %member.id, caller_id = %auth.member_id, "Member updated");

    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/members/{id}
pub async fn delete_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MemberRepo::delete(&state.pool, &member_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id: member_id,
        }));
    }

    tracing::info!(member_id = %member_id, caller_id = %auth.member_id, "Member deleted");

    Ok(StatusCode::NO_CONTENT)
}
