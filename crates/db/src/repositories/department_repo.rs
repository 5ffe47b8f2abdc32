//! Repository for the `departments` table.

use sqlx::SqlitePool;
use tasklane_core::types::new_id;

use crate::models::department::{CreateDepartment, Department, UpdateDepartment};

/// Column list for `departments` queries.
const DEPARTMENT_COLUMNS: &str = "id, company_id, name, description, created_at";

/// Provides department CRUD, nested under a company.
pub struct DepartmentRepo;

impl DepartmentRepo {
    pub async fn create(
        pool: &SqlitePool,
        company_id: &str,
        input: &CreateDepartment,
    ) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments (id, company_id, name, description) VALUES (?, ?, ?, ?) \
             RETURNING {DEPARTMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(new_id())
            .bind(company_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: &str,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {DEPARTMENT_COLUMNS} FROM departments WHERE id = ?");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_company(
        pool: &SqlitePool,
        company_id: &str,
    ) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!(
            "SELECT {DEPARTMENT_COLUMNS} FROM departments \
             WHERE company_id = ? ORDER BY created_at"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        input: &UpdateDepartment,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!(
            "UPDATE departments SET \
                name = COALESCE(?, name), \
                description = COALESCE(?, description) \
             WHERE id = ? \
             RETURNING {DEPARTMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
