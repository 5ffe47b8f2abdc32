//! Route definitions for boards and their nested resources.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{board_members, boards, labels, lists};
use crate::state::AppState;

/// Board routes mounted at `/boards`.
///
/// ```text
/// GET    /                           -> list_boards
/// POST   /                           -> create_board
/// GET    /{id}                       -> get_board (full aggregate)
/// PUT    /{id}                       -> update_board
/// DELETE /{id}                       -> delete_board
/// GET    /{id}/gantt                 -> board_gantt
/// GET    /{id}/members               -> list_members
/// POST   /{id}/members               -> add_member
/// PUT    /{id}/members/{member_id}   -> update_member_role
/// DELETE /{id}/members/{member_id}   -> remove_member
/// POST   /{id}/lists                 -> create_list
/// PUT    /{id}/lists/reorder         -> reorder_lists
/// POST   /{id}/labels                -> create_label
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(boards::list_boards).post(boards::create_board))
        .route(
            "/{id}",
            get(boards::get_board)
                .put(boards::update_board)
                .delete(boards::delete_board),
        )
        .route("/{id}/gantt", get(boards::board_gantt))
        .route(
            "/{id}/members",
            get(board_members::list_members).post(board_members::add_member),
        )
        .route(
            "/{id}/members/{member_id}",
            put(board_members::update_member_role).delete(board_members::remove_member),
        )
        .route("/{id}/lists", post(lists::create_list))
        .route("/{id}/lists/reorder", put(lists::reorder_lists))
        .route("/{id}/labels", post(labels::create_label))
}
