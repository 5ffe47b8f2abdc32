//! Route definitions for member profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::members;
use crate::state::AppState;

/// Member routes mounted at `/members`.
///
/// ```text
/// GET    /      -> list_members
/// GET    /{id}  -> get_member
/// PUT    /{id}  -> update_member
/// DELETE /{id}  -> delete_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(members::list_members))
        .route(
            "/{id}",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
}
