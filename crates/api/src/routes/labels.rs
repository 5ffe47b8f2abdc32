//! Route definitions for label item operations.

use axum::routing::put;
use axum::Router;

use crate::handlers::labels;
use crate::state::AppState;

/// Label routes mounted at `/labels`. Creation is board-scoped and lives
/// under `/boards/{id}/labels`.
///
/// ```text
/// PUT    /{id}  -> update_label
/// DELETE /{id}  -> delete_label
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(labels::update_label).delete(labels::delete_label),
    )
}
