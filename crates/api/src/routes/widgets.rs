//! Route definitions for dashboard widgets.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::widgets;
use crate::state::AppState;

/// Widget routes mounted at `/widgets`. All caller-scoped.
///
/// ```text
/// GET    /                      -> list_widgets
/// POST   /                      -> create_widget
/// PUT    /reorder               -> reorder_widgets
/// PUT    /{id}                  -> update_widget
/// DELETE /{id}                  -> delete_widget
/// GET    /data/{widget_type}    -> widget_data
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(widgets::list_widgets).post(widgets::create_widget))
        .route("/reorder", put(widgets::reorder_widgets))
        .route(
            "/{id}",
            put(widgets::update_widget).delete(widgets::delete_widget),
        )
        .route("/data/{widget_type}", get(widgets::widget_data))
}
