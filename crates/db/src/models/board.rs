//! Board models, the board aggregate tree, and related DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasklane_core::types::{DbId, Timestamp};

use crate::models::card::CardWithLabels;
use crate::models::label::Label;
use crate::models::list::List;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `boards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Board {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_public: bool,
    pub owner_id: Option<DbId>,
    pub company_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub last_activity: Timestamp,
    pub created_at: Timestamp,
}

/// A board member joined with their member row, as returned in the
/// aggregate and by the membership listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BoardMemberInfo {
    pub member_id: DbId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: String,
    pub joined_at: Timestamp,
}

/// A raw membership row, used by the guards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BoardMembership {
    pub id: DbId,
    pub board_id: DbId,
    pub member_id: DbId,
    pub role: String,
    pub joined_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Aggregate view
// ---------------------------------------------------------------------------

/// A list with its non-archived cards, ordered by position.
#[derive(Debug, Clone, Serialize)]
pub struct ListWithCards {
    #[serde(flatten)]
    pub list: List,
    pub cards: Vec<CardWithLabels>,
}

/// The full board tree: board row, lists with cards (each with resolved
/// labels and typed checklist items), the board's label set, and its
/// members with role and join timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct BoardAggregate {
    #[serde(flatten)]
    pub board: Board,
    pub lists: Vec<ListWithCards>,
    pub labels: Vec<Label>,
    pub members: Vec<BoardMemberInfo>,
}

/// One row of the Gantt view: scheduling fields for a non-archived card.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GanttRow {
    pub id: DbId,
    pub title: String,
    pub list_id: DbId,
    pub list_title: String,
    pub status: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub due_date: Option<String>,
    pub dependencies: Option<String>,
    pub member_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a board. The caller becomes the owner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoard {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_public: Option<bool>,
    pub company_id: Option<DbId>,
    pub department_id: Option<DbId>,
}

/// DTO for updating a board. Omitted fields keep their current values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBoard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_public: Option<bool>,
}

/// DTO for adding a member to a board.
#[derive(Debug, Clone, Deserialize)]
pub struct AddBoardMember {
    pub member_id: DbId,
    pub role: Option<String>,
}

/// DTO for changing a board member's role.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBoardMemberRole {
    pub role: String,
}

/// DTO for reordering lists within a board.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderLists {
    pub list_ids: Vec<DbId>,
}
