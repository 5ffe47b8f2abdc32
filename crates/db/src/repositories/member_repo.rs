//! Repository for the `members` table.

use sqlx::SqlitePool;
use tasklane_core::types::new_id;

use crate::models::member::{CreateMember, Member, UpdateMember};

/// Column list for `members` queries.
const MEMBER_COLUMNS: &str = "\
    id, name, email, password_hash, avatar, company_id, department_id, created_at";

/// Provides member CRUD and the email lookup used by login.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a member row. The email unique index rejects duplicates;
    /// registration pre-checks and translates that to a conflict.
    pub async fn create(pool: &SqlitePool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members \
             (id, name, email, password_hash, avatar, company_id, department_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING {MEMBER_COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.avatar)
            .bind(&input.company_id)
            .bind(&input.department_id)
            .fetch_one(pool)
            .await
    }

    /// Find a member by id.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = ?");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a member by email (the login key).
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE email = ?");
        sqlx::query_as::<_, Member>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all members, newest last.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM members ORDER BY created_at");
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    /// Update a member's profile fields.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        input: &UpdateMember,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE members SET \
                name = COALESCE(?, name), \
                avatar = COALESCE(?, avatar), \
                company_id = COALESCE(?, company_id), \
                department_id = COALESCE(?, department_id) \
             WHERE id = ? \
             RETURNING {MEMBER_COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.name)
            .bind(&input.avatar)
            .bind(&input.company_id)
            .bind(&input.department_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member. Their memberships, widgets, and daily tasks
    /// cascade; owned boards keep a dangling owner reference by design.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
