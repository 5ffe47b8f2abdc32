//! Explicit authorization guards for board and company resources.
//!
//! Guards are plain async functions called at the top of a handler body,
//! not extractors: board access depends on a path parameter, so the check
//! needs the already-parsed id. Each guard resolves the target row first,
//! so a missing board is a 404 rather than a 403.
//!
//! The board owner holds an implicit admin role and never has a
//! `board_members` row of their own.

use tasklane_core::error::CoreError;
use tasklane_core::roles::ROLE_ADMIN;
use tasklane_db::models::board::Board;
use tasklane_db::repositories::{BoardMemberRepo, BoardRepo, MemberRepo};
use tasklane_db::DbPool;

use crate::error::{AppError, AppResult};

/// Require that `member_id` is the board's owner or has a membership row.
///
/// Returns the board row so handlers don't re-fetch it.
pub async fn require_board_member(
    pool: &DbPool,
    board_id: &str,
    member_id: &str,
) -> AppResult<Board> {
    let board = BoardRepo::find_by_id(pool, board_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Board",
                id: board_id.to_string(),
            })
        })?;

    if board.owner_id.as_deref() == Some(member_id) {
        return Ok(board);
    }

    if BoardMemberRepo::find(pool, board_id, member_id)
        .await?
        .is_some()
    {
        return Ok(board);
    }

    Err(AppError::Core(CoreError::Forbidden(
        "You are not a member of this board".into(),
    )))
}

/// Require that `member_id` is the board's owner or an admin member.
pub async fn require_board_admin(
    pool: &DbPool,
    board_id: &str,
    member_id: &str,
) -> AppResult<Board> {
    let board = BoardRepo::find_by_id(pool, board_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Board",
                id: board_id.to_string(),
            })
        })?;

    if board.owner_id.as_deref() == Some(member_id) {
        return Ok(board);
    }

    match BoardMemberRepo::find(pool, board_id, member_id).await? {
        Some(membership) if membership.role == ROLE_ADMIN => Ok(board),
        _ => Err(AppError::Core(CoreError::Forbidden(
            "Board admin role required".into(),
        ))),
    }
}

/// Require that the caller is directly affiliated with the company
/// (`member.company_id` equals the target company id).
pub async fn require_company_affiliate(
    pool: &DbPool,
    company_id: &str,
    member_id: &str,
) -> AppResult<()> {
    let member = MemberRepo::find_by_id(pool, member_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Member",
                id: member_id.to_string(),
            })
        })?;

    if member.company_id.as_deref() == Some(company_id) {
        return Ok(());
    }

    Err(AppError::Core(CoreError::Forbidden(
        "You are not affiliated with this company".into(),
    )))
}
