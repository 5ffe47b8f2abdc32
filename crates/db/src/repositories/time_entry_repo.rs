//! Repository for the `card_time_entries` table and the tracking
//! columns on `cards`.
//!
//! A card has at most one open session. Opening stamps
//! `tracking_started_at`; closing folds the elapsed seconds into
//! `total_time_spent` and clears the stamp. Elapsed time is computed in
//! SQL from the stored timestamps, so the clock that measures a session
//! is the same one that stamped it.

use sqlx::{SqliteConnection, SqlitePool};
use tasklane_core::timelog::TrackAction;
use tasklane_core::types::new_id;

use crate::models::card::{Card, TimeEntry};
use crate::repositories::board_repo::NOW;
use crate::repositories::card_repo::CARD_COLUMNS;
use crate::repositories::BoardRepo;

/// Column list for `card_time_entries` queries.
const ENTRY_COLUMNS: &str = "\
    id, card_id, member_id, action, started_at, ended_at, duration, note, created_at";

/// Provides session open/close, history, the live session clock, and
/// the total reset for card time tracking.
pub struct TimeEntryRepo;

impl TimeEntryRepo {
    /// Open a tracking session (`start` or `resume`): stamp the card
    /// and record the action row. The caller checks the card is idle.
    pub async fn open_session(
        pool: &SqlitePool,
        card: &Card,
        member_id: &str,
        action: TrackAction,
        note: Option<&str>,
    ) -> Result<TimeEntry, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query =
            format!("UPDATE cards SET is_tracking = 1, tracking_started_at = {NOW} WHERE id = ?");
        sqlx::query(&query).bind(&card.id).execute(&mut *tx).await?;

        // started_at is read back from the card row so the entry and the
        // session stamp are the same instant.
        let query = format!(
            "INSERT INTO card_time_entries (id, card_id, member_id, action, started_at, note) \
             SELECT ?, id, ?, ?, tracking_started_at, ? FROM cards WHERE id = ? \
             RETURNING {ENTRY_COLUMNS}"
        );
        let entry = sqlx::query_as::<_, TimeEntry>(&query)
            .bind(new_id())
            .bind(member_id)
            .bind(action.as_str())
            .bind(note)
            .bind(&card.id)
            .fetch_one(&mut *tx)
            .await?;

        BoardRepo::touch(&mut *tx, &card.board_id).await?;
        tx.commit().await?;
        Ok(entry)
    }

    /// Close the open session (`pause` or `stop`): record the action row
    /// with the session's duration, fold the seconds into the card's
    /// total, and clear the session. The caller checks the card is
    /// tracking.
    pub async fn close_session(
        pool: &SqlitePool,
        card: &Card,
        member_id: &str,
        action: TrackAction,
        note: Option<&str>,
    ) -> Result<TimeEntry, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let duration = Self::elapsed_secs(&mut tx, &card.id).await?;

        let query = format!(
            "INSERT INTO card_time_entries \
             (id, card_id, member_id, action, started_at, ended_at, duration, note) \
             SELECT ?, id, ?, ?, tracking_started_at, {NOW}, ?, ? FROM cards WHERE id = ? \
             RETURNING {ENTRY_COLUMNS}"
        );
        let entry = sqlx::query_as::<_, TimeEntry>(&query)
            .bind(new_id())
            .bind(member_id)
            .bind(action.as_str())
            .bind(duration)
            .bind(note)
            .bind(&card.id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE cards SET total_time_spent = total_time_spent + ?, \
             is_tracking = 0, tracking_started_at = NULL WHERE id = ?",
        )
        .bind(duration)
        .bind(&card.id)
        .execute(&mut *tx)
        .await?;

        BoardRepo::touch(&mut *tx, &card.board_id).await?;
        tx.commit().await?;
        Ok(entry)
    }

    /// Action history for a card, most recent first.
    pub async fn history(pool: &SqlitePool, card_id: &str) -> Result<Vec<TimeEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM card_time_entries \
             WHERE card_id = ? ORDER BY created_at DESC, rowid DESC"
        );
        sqlx::query_as::<_, TimeEntry>(&query)
            .bind(card_id)
            .fetch_all(pool)
            .await
    }

    /// Seconds elapsed in the card's open session; 0 when idle.
    pub async fn current_session_secs(
        pool: &SqlitePool,
        card_id: &str,
    ) -> Result<i64, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::elapsed_secs(&mut conn, card_id).await
    }

    /// Zero the accumulated total and close any open session. History
    /// rows are kept. Returns the updated card.
    pub async fn reset(pool: &SqlitePool, card: &Card) -> Result<Option<Card>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE cards SET total_time_spent = 0, is_tracking = 0, \
             tracking_started_at = NULL WHERE id = ? RETURNING {CARD_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Card>(&query)
            .bind(&card.id)
            .fetch_optional(&mut *tx)
            .await?;

        if updated.is_some() {
            BoardRepo::touch(&mut *tx, &card.board_id).await?;
        }
        tx.commit().await?;
        Ok(updated)
    }

    /// Whole seconds since the card's session opened, clamped at zero;
    /// 0 when the card is idle.
    async fn elapsed_secs(conn: &mut SqliteConnection, card_id: &str) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT CAST(MAX(ROUND((julianday({NOW}) - \
                 julianday(COALESCE(tracking_started_at, {NOW}))) * 86400), 0) AS INTEGER) \
             FROM cards WHERE id = ?"
        );
        let (secs,): (i64,) = sqlx::query_as(&query)
            .bind(card_id)
            .fetch_one(conn)
            .await?;
        Ok(secs)
    }
}
