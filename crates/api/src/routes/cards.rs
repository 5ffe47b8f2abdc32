//! Route definitions for cards, their checklists, label attachments,
//! and time tracking.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{cards, labels, time_tracking};
use crate::state::AppState;

/// Card routes mounted at `/cards`.
///
/// ```text
/// PUT    /{id}                         -> update_card
/// DELETE /{id}                         -> delete_card
/// PUT    /{id}/archive                 -> archive_card
/// PUT    /{id}/restore                 -> restore_card
/// PUT    /{id}/move                    -> move_card
/// POST   /{id}/copy                    -> copy_card
/// POST   /{id}/checklist               -> add_checklist_item
/// PUT    /{id}/checklist/{item_id}     -> update_checklist_item
/// DELETE /{id}/checklist/{item_id}     -> remove_checklist_item
/// POST   /{id}/labels/{label_id}       -> attach_label
/// DELETE /{id}/labels/{label_id}       -> detach_label
/// POST   /{id}/time-entries            -> record_time_action
/// GET    /{id}/time-entries            -> list_time_entries
/// GET    /{id}/time-summary            -> time_summary
/// POST   /{id}/time-reset              -> reset_time
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(cards::update_card).delete(cards::delete_card))
        .route("/{id}/archive", put(cards::archive_card))
        .route("/{id}/restore", put(cards::restore_card))
        .route("/{id}/move", put(cards::move_card))
        .route("/{id}/copy", post(cards::copy_card))
        .route("/{id}/checklist", post(cards::add_checklist_item))
        .route(
            "/{id}/checklist/{item_id}",
            put(cards::update_checklist_item).delete(cards::remove_checklist_item),
        )
        .route(
            "/{id}/labels/{label_id}",
            post(labels::attach_label).delete(labels::detach_label),
        )
        .route(
            "/{id}/time-entries",
            post(time_tracking::record_time_action).get(time_tracking::list_time_entries),
        )
        .route("/{id}/time-summary", get(time_tracking::time_summary))
        .route("/{id}/time-reset", post(time_tracking::reset_time))
}
