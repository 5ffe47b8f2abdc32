//! Route definitions for lists and list-scoped card operations.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::{cards, lists};
use crate::state::AppState;

/// List routes mounted at `/lists`.
///
/// ```text
/// PUT    /{id}                -> update_list
/// DELETE /{id}                -> delete_list
/// PUT    /{id}/archive        -> archive_list
/// PUT    /{id}/restore        -> restore_list
/// POST   /{id}/cards          -> create_card
/// PUT    /{id}/cards/reorder  -> reorder_cards
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(lists::update_list).delete(lists::delete_list))
        .route("/{id}/archive", put(lists::archive_list))
        .route("/{id}/restore", put(lists::restore_list))
        .route("/{id}/cards", post(cards::create_card))
        .route("/{id}/cards/reorder", put(cards::reorder_cards))
}
