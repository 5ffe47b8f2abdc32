//! Member models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasklane_core::types::{DbId, Timestamp};

/// A row from the `members` table.
///
/// The password hash never leaves the server; it is skipped on
/// serialization so a `Member` can be returned from handlers directly.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub avatar: Option<String>,
    pub company_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for inserting a member row (registration happens in the API crate,
/// which hashes the password before building this).
#[derive(Debug, Clone)]
pub struct CreateMember {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub company_id: Option<DbId>,
    pub department_id: Option<DbId>,
}

/// DTO for updating a member's profile. Email and password are immutable
/// through this path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub company_id: Option<DbId>,
    pub department_id: Option<DbId>,
}
