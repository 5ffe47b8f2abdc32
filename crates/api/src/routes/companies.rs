//! Route definitions for companies and company-scoped departments.

use axum::routing::get;
use axum::Router;

use crate::handlers::{companies, departments};
use crate::state::AppState;

/// Company routes mounted at `/companies`.
///
/// ```text
/// GET    /                   -> list_companies
/// POST   /                   -> create_company
/// GET    /{id}               -> get_company
/// PUT    /{id}               -> update_company
/// DELETE /{id}               -> delete_company
/// GET    /{id}/departments   -> list_departments
/// POST   /{id}/departments   -> create_department
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/{id}",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
        .route(
            "/{id}/departments",
            get(departments::list_departments).post(departments::create_department),
        )
}
