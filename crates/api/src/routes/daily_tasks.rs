//! Route definitions for daily tasks and their instances.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::daily_tasks;
use crate::state::AppState;

/// Daily-task routes mounted at `/daily-tasks`. All caller-scoped.
///
/// ```text
/// GET    /                  -> list_tasks
/// POST   /                  -> create_task
/// GET    /summary           -> summary (?date=YYYY-MM-DD)
/// PUT    /{id}              -> update_task
/// DELETE /{id}              -> delete_task
/// PUT    /{id}/start        -> start_task
/// PUT    /{id}/complete     -> complete_task
/// PUT    /{id}/skip         -> skip_task
/// GET    /{id}/instances    -> task_instances
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(daily_tasks::list_tasks).post(daily_tasks::create_task),
        )
        .route("/summary", get(daily_tasks::summary))
        .route(
            "/{id}",
            put(daily_tasks::update_task).delete(daily_tasks::delete_task),
        )
        .route("/{id}/start", put(daily_tasks::start_task))
        .route("/{id}/complete", put(daily_tasks::complete_task))
        .route("/{id}/skip", put(daily_tasks::skip_task))
        .route("/{id}/instances", get(daily_tasks::task_instances))
}
