//! Repository for the `companies` table.

use sqlx::SqlitePool;
use tasklane_core::types::new_id;

use crate::models::company::{Company, CreateCompany, UpdateCompany};

/// Column list for `companies` queries.
const COMPANY_COLUMNS: &str = "id, name, description, created_at";

/// Provides company CRUD.
pub struct CompanyRepo;

impl CompanyRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (id, name, description) VALUES (?, ?, ?) \
             RETURNING {COMPANY_COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = ?");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COMPANY_COLUMNS} FROM companies ORDER BY created_at");
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET \
                name = COALESCE(?, name), \
                description = COALESCE(?, description) \
             WHERE id = ? \
             RETURNING {COMPANY_COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company. Departments cascade; member and board
    /// affiliations fall back to NULL.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
