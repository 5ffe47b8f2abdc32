//! Repository for the `cards` table.
//!
//! Cards are denormalized onto their board (`board_id` alongside
//! `list_id`) so board-wide reads avoid a join. Every mutation touches
//! the owning board's `last_activity`; move touches both boards.

use sqlx::types::Json;
use sqlx::SqlitePool;
use tasklane_core::checklist::ChecklistItem;
use tasklane_core::types::{new_id, DbId};

use crate::models::card::{Card, CardDestination, CreateCard, UpdateCard};
use crate::repositories::BoardRepo;

/// Column list for `cards` queries.
pub(crate) const CARD_COLUMNS: &str = "\
    id, list_id, board_id, title, description, position, due_date, start_date, \
    end_date, card_type, status, member_id, dependencies, checklist_items, \
    archived, total_time_spent, is_tracking, tracking_started_at, created_at";

/// Provides CRUD, archive/restore, move/copy, reorder, and the checklist
/// write path for cards.
pub struct CardRepo;

impl CardRepo {
    /// Create a card in a list. The board id is derived from the list row.
    /// When no position is supplied the card is appended after the list's
    /// current maximum.
    pub async fn create(
        pool: &SqlitePool,
        list_id: &str,
        board_id: &str,
        input: &CreateCard,
    ) -> Result<Card, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let position = match input.position {
            Some(p) => p,
            None => {
                let (max,): (Option<i64>,) =
                    sqlx::query_as("SELECT MAX(position) FROM cards WHERE list_id = ?")
                        .bind(list_id)
                        .fetch_one(&mut *tx)
                        .await?;
                max.map_or(0, |m| m + 1)
            }
        };

        let query = format!(
            "INSERT INTO cards \
             (id, list_id, board_id, title, description, position, due_date, start_date, \
              end_date, card_type, status, member_id, dependencies) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {CARD_COLUMNS}"
        );
        let card = sqlx::query_as::<_, Card>(&query)
            .bind(new_id())
            .bind(list_id)
            .bind(board_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(position)
            .bind(&input.due_date)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(&input.card_type)
            .bind(input.status.as_deref().unwrap_or("todo"))
            .bind(&input.member_id)
            .bind(&input.dependencies)
            .fetch_one(&mut *tx)
            .await?;

        BoardRepo::touch(&mut *tx, board_id).await?;
        tx.commit().await?;
        Ok(card)
    }

    /// Find a card by its id (archived or not).
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = ?");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a card's fields. Omitted fields are kept; the checklist is
    /// written only through [`CardRepo::save_checklist`].
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        input: &UpdateCard,
    ) -> Result<Option<Card>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE cards SET \
                title = COALESCE(?, title), \
                description = COALESCE(?, description), \
                position = COALESCE(?, position), \
                due_date = COALESCE(?, due_date), \
                start_date = COALESCE(?, start_date), \
                end_date = COALESCE(?, end_date), \
                card_type = COALESCE(?, card_type), \
                status = COALESCE(?, status), \
                member_id = COALESCE(?, member_id), \
                dependencies = COALESCE(?, dependencies) \
             WHERE id = ? \
             RETURNING {CARD_COLUMNS}"
        );
        let card = sqlx::query_as::<_, Card>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.position)
            .bind(&input.due_date)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(&input.card_type)
            .bind(&input.status)
            .bind(&input.member_id)
            .bind(&input.dependencies)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(card) = &card {
            BoardRepo::touch(&mut *tx, &card.board_id).await?;
        }
        tx.commit().await?;
        Ok(card)
    }

    /// Delete a card. Its label join rows cascade.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted: Option<(DbId,)> =
            sqlx::query_as("DELETE FROM cards WHERE id = ? RETURNING board_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if let Some((board_id,)) = &deleted {
            BoardRepo::touch(&mut *tx, board_id).await?;
        }
        tx.commit().await?;
        Ok(deleted.is_some())
    }

    /// Archive or restore a card.
    pub async fn set_archived(
        pool: &SqlitePool,
        id: &str,
        archived: bool,
    ) -> Result<Option<Card>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query =
            format!("UPDATE cards SET archived = ? WHERE id = ? RETURNING {CARD_COLUMNS}");
        let card = sqlx::query_as::<_, Card>(&query)
            .bind(archived)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(card) = &card {
            BoardRepo::touch(&mut *tx, &card.board_id).await?;
        }
        tx.commit().await?;
        Ok(card)
    }

    /// Move a card to another list/board without touching its position.
    /// Touches both the source and destination boards.
    pub async fn move_card(
        pool: &SqlitePool,
        id: &str,
        source_board_id: &str,
        dest: &CardDestination,
    ) -> Result<Option<Card>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE cards SET list_id = ?, board_id = ? WHERE id = ? RETURNING {CARD_COLUMNS}"
        );
        let card = sqlx::query_as::<_, Card>(&query)
            .bind(&dest.list_id)
            .bind(&dest.board_id)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if card.is_some() {
            BoardRepo::touch(&mut *tx, source_board_id).await?;
            if dest.board_id != source_board_id {
                BoardRepo::touch(&mut *tx, &dest.board_id).await?;
            }
        }
        tx.commit().await?;
        Ok(card)
    }

    /// Duplicate a card into a destination list/board under a new id,
    /// checklist state verbatim, label associations included. The copy
    /// starts with a fresh time ledger: zero total, no open session.
    pub async fn copy(
        pool: &SqlitePool,
        source: &Card,
        dest: &CardDestination,
    ) -> Result<Card, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO cards \
             (id, list_id, board_id, title, description, position, due_date, start_date, \
              end_date, card_type, status, member_id, dependencies, checklist_items, archived) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {CARD_COLUMNS}"
        );
        let copy = sqlx::query_as::<_, Card>(&query)
            .bind(new_id())
            .bind(&dest.list_id)
            .bind(&dest.board_id)
            .bind(&source.title)
            .bind(&source.description)
            .bind(source.position)
            .bind(&source.due_date)
            .bind(&source.start_date)
            .bind(&source.end_date)
            .bind(&source.card_type)
            .bind(&source.status)
            .bind(&source.member_id)
            .bind(&source.dependencies)
            .bind(&source.checklist_items)
            .bind(source.archived)
            .fetch_one(&mut *tx)
            .await?;

        // Copy label associations. Labels stay scoped to the source
        // board, so this is only meaningful for same-board copies; the
        // unique pair index is the backstop against double-insertion.
        let links: Vec<(DbId,)> =
            sqlx::query_as("SELECT label_id FROM card_labels WHERE card_id = ?")
                .bind(&source.id)
                .fetch_all(&mut *tx)
                .await?;
        for (label_id,) in links {
            sqlx::query(
                "INSERT OR IGNORE INTO card_labels (id, card_id, label_id) VALUES (?, ?, ?)",
            )
            .bind(new_id())
            .bind(&copy.id)
            .bind(&label_id)
            .execute(&mut *tx)
            .await?;
        }

        BoardRepo::touch(&mut *tx, &dest.board_id).await?;
        tx.commit().await?;
        Ok(copy)
    }

    /// Ids of the list's cards, ordered by position.
    pub async fn ids_for_list(pool: &SqlitePool, list_id: &str) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT id FROM cards WHERE list_id = ? ORDER BY position")
                .bind(list_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Rewrite positions as position = index over the supplied sequence,
    /// in one transaction, scoped to the list.
    pub async fn reorder(
        pool: &SqlitePool,
        list_id: &str,
        board_id: &str,
        card_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for (index, card_id) in card_ids.iter().enumerate() {
            sqlx::query("UPDATE cards SET position = ? WHERE id = ? AND list_id = ?")
                .bind(index as i64)
                .bind(card_id)
                .bind(list_id)
                .execute(&mut *tx)
                .await?;
        }

        BoardRepo::touch(&mut *tx, board_id).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Persist a card's full checklist after an in-memory edit.
    pub async fn save_checklist(
        pool: &SqlitePool,
        id: &str,
        items: &[ChecklistItem],
    ) -> Result<Option<Card>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE cards SET checklist_items = ? WHERE id = ? RETURNING {CARD_COLUMNS}"
        );
        let card = sqlx::query_as::<_, Card>(&query)
            .bind(Json(items))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(card) = &card {
            BoardRepo::touch(&mut *tx, &card.board_id).await?;
        }
        tx.commit().await?;
        Ok(card)
    }
}
