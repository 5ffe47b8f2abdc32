//! Repository for the `labels` and `card_labels` tables.

use sqlx::SqlitePool;
use tasklane_core::types::new_id;

use crate::models::label::{CreateLabel, Label, UpdateLabel};
use crate::repositories::BoardRepo;

/// Column list for `labels` queries.
const LABEL_COLUMNS: &str = "id, board_id, title, color, created_at";

/// Provides label CRUD and card attachment/detachment.
pub struct LabelRepo;

impl LabelRepo {
    /// Create a label scoped to a board.
    pub async fn create(
        pool: &SqlitePool,
        board_id: &str,
        input: &CreateLabel,
    ) -> Result<Label, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO labels (id, board_id, title, color) \
             VALUES (?, ?, ?, ?) \
             RETURNING {LABEL_COLUMNS}"
        );
        let label = sqlx::query_as::<_, Label>(&query)
            .bind(new_id())
            .bind(board_id)
            .bind(&input.title)
            .bind(&input.color)
            .fetch_one(&mut *tx)
            .await?;

        BoardRepo::touch(&mut *tx, board_id).await?;
        tx.commit().await?;
        Ok(label)
    }

    /// Find a label by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Label>, sqlx::Error> {
        let query = format!("SELECT {LABEL_COLUMNS} FROM labels WHERE id = ?");
        sqlx::query_as::<_, Label>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a label's title and/or color.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        input: &UpdateLabel,
    ) -> Result<Option<Label>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE labels SET \
                title = COALESCE(?, title), \
                color = COALESCE(?, color) \
             WHERE id = ? \
             RETURNING {LABEL_COLUMNS}"
        );
        let label = sqlx::query_as::<_, Label>(&query)
            .bind(&input.title)
            .bind(&input.color)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(label) = &label {
            BoardRepo::touch(&mut *tx, &label.board_id).await?;
        }
        tx.commit().await?;
        Ok(label)
    }

    /// Delete a label. Its card join rows cascade.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted: Option<(String,)> =
            sqlx::query_as("DELETE FROM labels WHERE id = ? RETURNING board_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if let Some((board_id,)) = &deleted {
            BoardRepo::touch(&mut *tx, board_id).await?;
        }
        tx.commit().await?;
        Ok(deleted.is_some())
    }

    /// Whether the label is already attached to the card.
    pub async fn is_attached(
        pool: &SqlitePool,
        card_id: &str,
        label_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT id FROM card_labels WHERE card_id = ? AND label_id = ?")
                .bind(card_id)
                .bind(label_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }

    /// Attach a label to a card. The unique pair index backstops the
    /// duplicate pre-check in the handler.
    pub async fn attach(
        pool: &SqlitePool,
        card_id: &str,
        label_id: &str,
        board_id: &str,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("INSERT INTO card_labels (id, card_id, label_id) VALUES (?, ?, ?)")
            .bind(new_id())
            .bind(card_id)
            .bind(label_id)
            .execute(&mut *tx)
            .await?;

        BoardRepo::touch(&mut *tx, board_id).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Detach a label from a card.
    pub async fn detach(
        pool: &SqlitePool,
        card_id: &str,
        label_id: &str,
        board_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM card_labels WHERE card_id = ? AND label_id = ?")
            .bind(card_id)
            .bind(label_id)
            .execute(&mut *tx)
            .await?;

        BoardRepo::touch(&mut *tx, board_id).await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolved labels attached to one card.
    pub async fn labels_for_card(
        pool: &SqlitePool,
        card_id: &str,
    ) -> Result<Vec<Label>, sqlx::Error> {
        sqlx::query_as::<_, Label>(
            "SELECT l.id, l.board_id, l.title, l.color, l.created_at \
             FROM card_labels cl \
             JOIN labels l ON l.id = cl.label_id \
             WHERE cl.card_id = ? ORDER BY l.created_at",
        )
        .bind(card_id)
        .fetch_all(pool)
        .await
    }
}
