//! Handlers for departments, nested under their company.
//!
//! Creation and listing are company-scoped routes; item routes are flat
//! under `/departments`. Mutations use the same company-affiliate guard
//! as companies, resolved through the department's `company_id`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasklane_core::error::CoreError;
use tasklane_core::types::DbId;
use tasklane_db::models::department::{CreateDepartment, UpdateDepartment};
use tasklane_db::repositories::{CompanyRepo, DepartmentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::guards::require_company_affiliate;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/companies/{id}/departments
pub async fn list_departments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if CompanyRepo::find_by_id(&state.pool, &company_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id: company_id,
        }));
    }

    let departments = DepartmentRepo::list_for_company(&state.pool, &company_id).await?;

    Ok(Json(DataResponse { data: departments }))
}

/// POST /api/v1/companies/{id}/departments
///
/// Company-affiliate guard.
pub async fn create_department(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
    Json(input): Json<CreateDepartment>,
) -> AppResult<impl IntoResponse> {
    require_company_affiliate(&state.pool, &company_id, &auth.member_id).await?;

    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Department name must not be empty".into(),
        )));
    }

    let department = DepartmentRepo::create(&state.pool, &company_id, &input).await?;

    tracing::info!(
        department_id = %department.id,
        company_id = %company_id,
        member_id = %auth.member_id,
        "Department created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: department })))
}

/// GET /api/v1/departments/{id}
pub async fn get_department(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let department = DepartmentRepo::find_by_id(&state.pool, &department_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id: department_id,
        }))?;

    Ok(Json(DataResponse { data: department }))
}

/// PUT /api/v1/departments/{id}
///
/// Company-affiliate guard via the department's company.
pub async fn update_department(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
    Json(input): Json<UpdateDepartment>,
) -> AppResult<impl IntoResponse> {
    let department = DepartmentRepo::find_by_id(&state.pool, &department_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id: department_id,
        }))?;

    require_company_affiliate(&state.pool, &department.company_id, &auth.member_id).await?;

    let updated = DepartmentRepo::update(&state.pool, &department.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id: department.id,
        }))?;

    tracing::info!(department_id = %updated.id, member_id = %auth.member_id, "Department updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/departments/{id}
///
/// Company-affiliate guard via the department's company.
pub async fn delete_department(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let department = DepartmentRepo::find_by_id(&state.pool, &department_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id: department_id,
        }))?;

    require_company_affiliate(&state.pool, &department.company_id, &auth.member_id).await?;

    DepartmentRepo::delete(&state.pool, &department.id).await?;

    tracing::info!(department_id = %department.id, member_id = %auth.member_id, "Department deleted");

    Ok(StatusCode::NO_CONTENT)
}
