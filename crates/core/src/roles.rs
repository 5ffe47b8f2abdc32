//! Well-known board membership role names.
//!
//! These must match the CHECK constraint on `board_members.role` in
//! `migrations/0001_init.sql`.

pub const ROLE_MEMBER: &str = "member";
pub const ROLE_ADMIN: &str = "admin";

/// Whether `role` is one of the accepted board roles.
pub fn is_valid_role(role: &str) -> bool {
    role == ROLE_MEMBER || role == ROLE_ADMIN
}
