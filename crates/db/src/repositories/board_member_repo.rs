//! Repository for the `board_members` junction table.
//!
//! Every mutation touches the parent board's `last_activity` in the same
//! transaction.

use sqlx::SqlitePool;
use tasklane_core::types::new_id;

use crate::models::board::{BoardMemberInfo, BoardMembership};
use crate::repositories::BoardRepo;

/// Column list for `board_members` queries.
const MEMBERSHIP_COLUMNS: &str = "id, board_id, member_id, role, joined_at";

/// Provides membership lookups and mutations for boards.
pub struct BoardMemberRepo;

impl BoardMemberRepo {
    /// The board's members joined with name/email/avatar, oldest first.
    pub async fn list(
        pool: &SqlitePool,
        board_id: &str,
    ) -> Result<Vec<BoardMemberInfo>, sqlx::Error> {
        sqlx::query_as::<_, BoardMemberInfo>(
            "SELECT bm.member_id, m.name, m.email, m.avatar, bm.role, bm.joined_at \
             FROM board_members bm \
             JOIN members m ON m.id = bm.member_id \
             WHERE bm.board_id = ? ORDER BY bm.joined_at",
        )
        .bind(board_id)
        .fetch_all(pool)
        .await
    }

    /// The caller's membership row on a board, if any. Used by the guards.
    pub async fn find(
        pool: &SqlitePool,
        board_id: &str,
        member_id: &str,
    ) -> Result<Option<BoardMembership>, sqlx::Error> {
        let query = format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM board_members \
             WHERE board_id = ? AND member_id = ?"
        );
        sqlx::query_as::<_, BoardMembership>(&query)
            .bind(board_id)
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }

    /// Add a member to a board. The caller is expected to have checked
    /// for an existing membership; the unique index is the backstop.
    pub async fn add(
        pool: &SqlitePool,
        board_id: &str,
        member_id: &str,
        role: &str,
    ) -> Result<BoardMembership, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO board_members (id, board_id, member_id, role) \
             VALUES (?, ?, ?, ?) \
             RETURNING {MEMBERSHIP_COLUMNS}"
        );
        let membership = sqlx::query_as::<_, BoardMembership>(&query)
            .bind(new_id())
            .bind(board_id)
            .bind(member_id)
            .bind(role)
            .fetch_one(&mut *tx)
            .await?;

        BoardRepo::touch(&mut *tx, board_id).await?;
        tx.commit().await?;
        Ok(membership)
    }

    /// Change a member's role on a board.
    pub async fn update_role(
        pool: &SqlitePool,
        board_id: &str,
        member_id: &str,
        role: &str,
    ) -> Result<Option<BoardMembership>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE board_members SET role = ? \
             WHERE board_id = ? AND member_id = ? \
             RETURNING {MEMBERSHIP_COLUMNS}"
        );
        let membership = sqlx::query_as::<_, BoardMembership>(&query)
            .bind(role)
            .bind(board_id)
            .bind(member_id)
            .fetch_optional(&mut *tx)
            .await?;

        BoardRepo::touch(&mut *tx, board_id).await?;
        tx.commit().await?;
        Ok(membership)
    }

    /// Remove a member from a board.
    pub async fn remove(
        pool: &SqlitePool,
        board_id: &str,
        member_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "DELETE FROM board_members WHERE board_id = ? AND member_id = ?",
        )
        .bind(board_id)
        .bind(member_id)
        .execute(&mut *tx)
        .await?;

        BoardRepo::touch(&mut *tx, board_id).await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
