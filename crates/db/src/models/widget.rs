//! Dashboard widget models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tasklane_core::types::{DbId, Timestamp};

/// A row from the `widgets` table. `config` is an opaque JSON document
/// owned by the frontend.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Widget {
    pub id: DbId,
    pub member_id: DbId,
    pub widget_type: String,
    pub title: String,
    pub config: Json<serde_json::Value>,
    pub position: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a widget for the calling member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWidget {
    pub widget_type: String,
    pub title: String,
    pub config: Option<serde_json::Value>,
    pub position: Option<i64>,
}

/// DTO for updating a widget.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWidget {
    pub title: Option<String>,
    pub config: Option<serde_json::Value>,
    pub position: Option<i64>,
    pub is_active: Option<bool>,
}

/// One `{id, position}` pair in a widget reorder batch.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetPosition {
    pub id: DbId,
    pub position: i64,
}

/// DTO for the widget reorder endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderWidgets {
    pub widgets: Vec<WidgetPosition>,
}

// ---------------------------------------------------------------------------
// Widget data views
// ---------------------------------------------------------------------------

/// One slice of the status chart: cards assigned to the caller counted
/// by status.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// One row of the recent-activities feed: a visible board ordered by
/// `last_activity`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentActivity {
    pub board_id: DbId,
    pub title: String,
    pub icon: Option<String>,
    pub last_activity: Timestamp,
}

/// One row of the personal Gantt widget: an assigned card with at least
/// one scheduling date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GanttCard {
    pub id: DbId,
    pub title: String,
    pub board_id: DbId,
    pub board_title: String,
    pub status: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub due_date: Option<String>,
}
