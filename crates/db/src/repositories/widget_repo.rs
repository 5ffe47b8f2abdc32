//! Repository for the `widgets` table and the widget data views.
//!
//! All operations are scoped to the owning member: lookups filter on
//! `member_id`, and the reorder batch enforces ownership in the UPDATE's
//! WHERE clause rather than trusting the supplied ids.

use sqlx::types::Json;
use sqlx::SqlitePool;
use tasklane_core::types::new_id;

use crate::models::widget::{
    CreateWidget, GanttCard, RecentActivity, StatusCount, UpdateWidget, Widget, WidgetPosition,
};

/// Column list for `widgets` queries.
const WIDGET_COLUMNS: &str = "\
    id, member_id, widget_type, title, config, position, is_active, created_at";

/// Provides widget CRUD, the ownership-scoped reorder, and the dashboard
/// data queries.
pub struct WidgetRepo;

impl WidgetRepo {
    /// Create a widget for a member. When no position is supplied the
    /// widget is appended after the member's current maximum.
    pub async fn create(
        pool: &SqlitePool,
        member_id: &str,
        input: &CreateWidget,
    ) -> Result<Widget, sqlx::Error> {
        let position = match input.position {
            Some(p) => p,
            None => {
                let (max,): (Option<i64>,) =
                    sqlx::query_as("SELECT MAX(position) FROM widgets WHERE member_id = ?")
                        .bind(member_id)
                        .fetch_one(pool)
                        .await?;
                max.map_or(0, |m| m + 1)
            }
        };

        let config = input
            .config
            .clone()
            .unwrap_or(serde_json::Value::Object(Default::default()));

        let query = format!(
            "INSERT INTO widgets (id, member_id, widget_type, title, config, position) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {WIDGET_COLUMNS}"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(new_id())
            .bind(member_id)
            .bind(&input.widget_type)
            .bind(&input.title)
            .bind(Json(config))
            .bind(position)
            .fetch_one(pool)
            .await
    }

    /// The member's widgets ordered by position.
    pub async fn list_for_member(
        pool: &SqlitePool,
        member_id: &str,
    ) -> Result<Vec<Widget>, sqlx::Error> {
        let query = format!(
            "SELECT {WIDGET_COLUMNS} FROM widgets WHERE member_id = ? ORDER BY position"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Find one of the member's widgets. Someone else's widget id is
    /// indistinguishable from a missing one.
    pub async fn find_for_member(
        pool: &SqlitePool,
        id: &str,
        member_id: &str,
    ) -> Result<Option<Widget>, sqlx::Error> {
        let query = format!(
            "SELECT {WIDGET_COLUMNS} FROM widgets WHERE id = ? AND member_id = ?"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(id)
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }

    /// Update one of the member's widgets.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        member_id: &str,
        input: &UpdateWidget,
    ) -> Result<Option<Widget>, sqlx::Error> {
        let query = format!(
            "UPDATE widgets SET \
                title = COALESCE(?, title), \
                config = COALESCE(?, config), \
                position = COALESCE(?, position), \
                is_active = COALESCE(?, is_active) \
             WHERE id = ? AND member_id = ? \
             RETURNING {WIDGET_COLUMNS}"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(&input.title)
            .bind(input.config.clone().map(Json))
            .bind(input.position)
            .bind(input.is_active)
            .bind(id)
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the member's widgets.
    pub async fn delete(pool: &SqlitePool, id: &str, member_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM widgets WHERE id = ? AND member_id = ?")
            .bind(id)
            .bind(member_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a batch of `{id, position}` pairs, all scoped to the member.
    /// A pair naming another member's widget matches no row and is a
    /// silent no-op.
    pub async fn reorder(
        pool: &SqlitePool,
        member_id: &str,
        positions: &[WidgetPosition],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for pair in positions {
            sqlx::query("UPDATE widgets SET position = ? WHERE id = ? AND member_id = ?")
                .bind(pair.position)
                .bind(&pair.id)
                .bind(member_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Widget data views
    // -----------------------------------------------------------------------

    /// Status chart: the member's assigned non-archived cards counted by
    /// status.
    pub async fn status_counts(
        pool: &SqlitePool,
        member_id: &str,
    ) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM cards \
             WHERE member_id = ? AND archived = 0 \
             GROUP BY status ORDER BY status",
        )
        .bind(member_id)
        .fetch_all(pool)
        .await
    }

    /// Recent activities: the member's visible boards by most recent
    /// activity.
    pub async fn recent_activities(
        pool: &SqlitePool,
        member_id: &str,
        limit: i64,
    ) -> Result<Vec<RecentActivity>, sqlx::Error> {
        sqlx::query_as::<_, RecentActivity>(
            "SELECT DISTINCT b.id AS board_id, b.title, b.icon, b.last_activity \
             FROM boards b \
             LEFT JOIN board_members bm ON bm.board_id = b.id AND bm.member_id = ?1 \
             WHERE b.is_public = 1 OR b.owner_id = ?1 OR bm.id IS NOT NULL \
             ORDER BY b.last_activity DESC LIMIT ?2",
        )
        .bind(member_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Personal Gantt: the member's assigned non-archived cards that have
    /// at least one scheduling date.
    pub async fn gantt_cards(
        pool: &SqlitePool,
        member_id: &str,
    ) -> Result<Vec<GanttCard>, sqlx::Error> {
        sqlx::query_as::<_, GanttCard>(
            "SELECT c.id, c.title, c.board_id, b.title AS board_title, c.status, \
                    c.start_date, c.end_date, c.due_date \
             FROM cards c \
             JOIN boards b ON b.id = c.board_id \
             WHERE c.member_id = ? AND c.archived = 0 \
               AND (c.start_date IS NOT NULL OR c.end_date IS NOT NULL) \
             ORDER BY c.start_date",
        )
        .bind(member_id)
        .fetch_all(pool)
        .await
    }
}
