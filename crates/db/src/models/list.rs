//! List models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasklane_core::types::{DbId, Timestamp};

/// A row from the `lists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct List {
    pub id: DbId,
    pub board_id: DbId,
    pub title: String,
    pub position: i64,
    pub archived: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a list on a board.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateList {
    pub title: String,
    /// Defaults to one past the board's current maximum.
    pub position: Option<i64>,
}

/// DTO for updating a list.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateList {
    pub title: Option<String>,
    pub position: Option<i64>,
}
