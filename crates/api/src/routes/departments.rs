//! Route definitions for department item operations.

use axum::routing::get;
use axum::Router;

use crate::handlers::departments;
use crate::state::AppState;

/// Department routes mounted at `/departments`. Creation and listing are
/// company-scoped and live under `/companies/{id}/departments`.
///
/// ```text
/// GET    /{id}  -> get_department
/// PUT    /{id}  -> update_department
/// DELETE /{id}  -> delete_department
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(departments::get_department)
            .put(departments::update_department)
            .delete(departments::delete_department),
    )
}
