//! Handlers for the `/companies` resource.
//!
//! Mutations are gated by the company-affiliate guard: only a member
//! whose `company_id` points at the company may change it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasklane_core::error::CoreError;
use tasklane_core::types::DbId;
use tasklane_db::models::company::{CreateCompany, UpdateCompany};
use tasklane_db::repositories::CompanyRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::guards::require_company_affiliate;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/companies
pub async fn list_companies(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let companies = CompanyRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: companies }))
}

/// POST /api/v1/companies
pub async fn create_company(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCompany>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Company name must not be empty".into(),
        )));
    }

    let company = CompanyRepo::create(&state.pool, &input).await?;

    tracing::info!(company_id = %company.id, member_id = %auth.member_id, "Company created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: company })))
}

/// GET /api/v1/companies/{id}
pub async fn get_company(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let company = CompanyRepo::find_by_id(&state.pool, &company_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id: company_id,
        }))?;

    Ok(Json(DataResponse { data: company }))
}

/// PUT /api/v1/companies/{id}
///
/// Company-affiliate guard.
pub async fn update_company(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<impl IntoResponse> {
    require_company_affiliate(&state.pool, &company_id, &auth.member_id).await?;

    let company = CompanyRepo::update(&state.pool, &company_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id: company_id,
        }))?;

    tracing::info!(company_id = %company.id, member_id = %auth.member_id, "Company updated");

    Ok(Json(DataResponse { data: company }))
}

/// DELETE /api/v1/companies/{id}
///
/// Company-affiliate guard.
pub async fn delete_company(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_company_affiliate(&state.pool, &company_id, &auth.member_id).await?;

    let deleted = CompanyRepo::delete(&state.pool, &company_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id: company_id,
        }));
    }

    tracing::info!(company_id = %company_id, member_id = %auth.member_id, "Company deleted");

    Ok(StatusCode::NO_CONTENT)
}
