//! Card models and DTOs.
//!
//! Checklist items are an embedded JSON column typed as
//! `Json<Vec<ChecklistItem>>`; the raw string never escapes the storage
//! boundary.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tasklane_core::checklist::ChecklistItem;
use tasklane_core::types::{DbId, Timestamp};

use crate::models::label::Label;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    pub list_id: DbId,
    pub board_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub position: i64,
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub card_type: Option<String>,
    pub status: String,
    /// Assignee reference by id; best-effort, not foreign-keyed.
    pub member_id: Option<DbId>,
    pub dependencies: Option<String>,
    pub checklist_items: Json<Vec<ChecklistItem>>,
    pub archived: bool,
    /// Accumulated tracked seconds across closed sessions.
    pub total_time_spent: i64,
    pub is_tracking: bool,
    /// When the open tracking session started; `None` when idle.
    pub tracking_started_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// A row from the `card_time_entries` table: one tracking action.
///
/// Opening actions (`start`, `resume`) carry only `started_at`; closing
/// actions (`pause`, `stop`) also carry `ended_at` and the session's
/// `duration` in seconds.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimeEntry {
    pub id: DbId,
    pub card_id: DbId,
    pub member_id: DbId,
    pub action: String,
    pub started_at: Option<Timestamp>,
    pub ended_at: Option<Timestamp>,
    pub duration: i64,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

/// A card's tracking state with its action history.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSummary {
    pub card_id: DbId,
    pub total_time_spent: i64,
    pub is_tracking: bool,
    pub tracking_started_at: Option<Timestamp>,
    /// Seconds elapsed in the open session; 0 when idle.
    pub current_session_secs: i64,
    pub entries: Vec<TimeEntry>,
}

/// A card with its resolved labels, as returned in the board aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct CardWithLabels {
    #[serde(flatten)]
    pub card: Card,
    pub labels: Vec<Label>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a card in a list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCard {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to one past the list's current maximum.
    pub position: Option<i64>,
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub card_type: Option<String>,
    /// Defaults to `"todo"`.
    pub status: Option<String>,
    pub member_id: Option<DbId>,
    pub dependencies: Option<String>,
}

/// DTO for updating a card. Omitted fields keep their current values;
/// checklist items are edited through the dedicated checklist endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<i64>,
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub card_type: Option<String>,
    pub status: Option<String>,
    pub member_id: Option<DbId>,
    pub dependencies: Option<String>,
}

/// DTO for moving or copying a card to a destination list/board.
#[derive(Debug, Clone, Deserialize)]
pub struct CardDestination {
    pub list_id: DbId,
    pub board_id: DbId,
}

/// DTO for reordering cards within a list.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderCards {
    pub card_ids: Vec<DbId>,
}

/// DTO for appending a checklist item.
#[derive(Debug, Clone, Deserialize)]
pub struct AddChecklistItem {
    pub text: String,
}

/// DTO for recording a tracking action against a card.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordTimeAction {
    /// One of `start`, `pause`, `resume`, `stop`.
    pub action: String,
    pub note: Option<String>,
}
