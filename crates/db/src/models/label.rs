//! Label models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasklane_core::types::{DbId, Timestamp};

/// A row from the `labels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Label {
    pub id: DbId,
    pub board_id: DbId,
    pub title: String,
    pub color: String,
    pub created_at: Timestamp,
}

/// DTO for creating a label on a board.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLabel {
    pub title: String,
    pub color: String,
}

/// DTO for updating a label.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLabel {
    pub title: Option<String>,
    pub color: Option<String>,
}
