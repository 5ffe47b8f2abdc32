//! Repository for the `lists` table.
//!
//! Every mutation touches the parent board's `last_activity` in the same
//! transaction, unconditionally on success.

use sqlx::SqlitePool;
use tasklane_core::types::{new_id, DbId};

use crate::models::list::{CreateList, List, UpdateList};
use crate::repositories::BoardRepo;

/// Column list for `lists` queries.
const LIST_COLUMNS: &str = "id, board_id, title, position, archived, created_at";

/// Provides CRUD, archive/restore, and reorder for lists.
pub struct ListRepo;

impl ListRepo {
    /// Create a list on a board. When no position is supplied the list is
    /// appended after the board's current maximum.
    pub async fn create(
        pool: &SqlitePool,
        board_id: &str,
        input: &CreateList,
    ) -> Result<List, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let position = match input.position {
            Some(p) => p,
            None => {
                let (max,): (Option<i64>,) =
                    sqlx::query_as("SELECT MAX(position) FROM lists WHERE board_id = ?")
                        .bind(board_id)
                        .fetch_one(&mut *tx)
                        .await?;
                max.map_or(0, |m| m + 1)
            }
        };

        let query = format!(
            "INSERT INTO lists (id, board_id, title, position) \
             VALUES (?, ?, ?, ?) \
             RETURNING {LIST_COLUMNS}"
        );
        let list = sqlx::query_as::<_, List>(&query)
            .bind(new_id())
            .bind(board_id)
            .bind(&input.title)
            .bind(position)
            .fetch_one(&mut *tx)
            .await?;

        BoardRepo::touch(&mut *tx, board_id).await?;
        tx.commit().await?;
        Ok(list)
    }

    /// Find a list by its id (archived or not).
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<List>, sqlx::Error> {
        let query = format!("SELECT {LIST_COLUMNS} FROM lists WHERE id = ?");
        sqlx::query_as::<_, List>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a list's title and/or position.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        input: &UpdateList,
    ) -> Result<Option<List>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE lists SET \
                title = COALESCE(?, title), \
                position = COALESCE(?, position) \
             WHERE id = ? \
             RETURNING {LIST_COLUMNS}"
        );
        let list = sqlx::query_as::<_, List>(&query)
            .bind(&input.title)
            .bind(input.position)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(list) = &list {
            BoardRepo::touch(&mut *tx, &list.board_id).await?;
        }
        tx.commit().await?;
        Ok(list)
    }

    /// Delete a list. Its cards cascade.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted: Option<(DbId,)> =
            sqlx::query_as("DELETE FROM lists WHERE id = ? RETURNING board_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if let Some((board_id,)) = &deleted {
            BoardRepo::touch(&mut *tx, board_id).await?;
        }
        tx.commit().await?;
        Ok(deleted.is_some())
    }

    /// Archive or restore a list. Archived lists (and their cards) drop
    /// out of the board aggregate but the rows remain.
    pub async fn set_archived(
        pool: &SqlitePool,
        id: &str,
        archived: bool,
    ) -> Result<Option<List>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE lists SET archived = ? WHERE id = ? RETURNING {LIST_COLUMNS}"
        );
        let list = sqlx::query_as::<_, List>(&query)
            .bind(archived)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(list) = &list {
            BoardRepo::touch(&mut *tx, &list.board_id).await?;
        }
        tx.commit().await?;
        Ok(list)
    }

    /// Ids of the board's lists, ordered by position. Used to validate
    /// reorder sequences before anything is written.
    pub async fn ids_for_board(
        pool: &SqlitePool,
        board_id: &str,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT id FROM lists WHERE board_id = ? ORDER BY position")
                .bind(board_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Rewrite positions as position = index over the supplied sequence,
    /// in one transaction. The board-id guard in the WHERE clause keeps a
    /// foreign id from ever being written.
    pub async fn reorder(
        pool: &SqlitePool,
        board_id: &str,
        list_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for (index, list_id) in list_ids.iter().enumerate() {
            sqlx::query("UPDATE lists SET position = ? WHERE id = ? AND board_id = ?")
                .bind(index as i64)
                .bind(list_id)
                .bind(board_id)
                .execute(&mut *tx)
                .await?;
        }

        BoardRepo::touch(&mut *tx, board_id).await?;
        tx.commit().await?;
        Ok(())
    }
}
