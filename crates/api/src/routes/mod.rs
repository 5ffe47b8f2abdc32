pub mod auth;
pub mod boards;
pub mod cards;
pub mod companies;
pub mod daily_tasks;
pub mod departments;
pub mod health;
pub mod labels;
pub mod lists;
pub mod members;
pub mod widgets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                             register (public)
/// /auth/login                                login (public)
///
/// /boards                                    list, create
/// /boards/{id}                               aggregate, update, delete
/// /boards/{id}/gantt                         scheduling view (GET)
/// /boards/{id}/members                       list, add
/// /boards/{id}/members/{member_id}           change role, remove
/// /boards/{id}/lists                         create list (POST)
/// /boards/{id}/lists/reorder                 reorder lists (PUT)
/// /boards/{id}/labels                        create label (POST)
///
/// /lists/{id}                                update, delete
/// /lists/{id}/archive                        archive (PUT)
/// /lists/{id}/restore                        restore (PUT)
/// /lists/{id}/cards                          create card (POST)
/// /lists/{id}/cards/reorder                  reorder cards (PUT)
///
/// /cards/{id}                                update, delete
/// /cards/{id}/archive                        archive (PUT)
/// /cards/{id}/restore                        restore (PUT)
/// /cards/{id}/move                           move (PUT)
/// /cards/{id}/copy                           copy (POST)
/// /cards/{id}/checklist                      append item (POST)
/// /cards/{id}/checklist/{item_id}            patch, remove item
/// /cards/{id}/labels/{label_id}              attach, detach
/// /cards/{id}/time-entries                   record action (POST), history (GET)
/// /cards/{id}/time-summary                   tracking summary (GET)
/// /cards/{id}/time-reset                     zero the total (POST)
///
/// /labels/{id}                               update, delete
///
/// /members                                   list
/// /members/{id}                              get, update, delete
///
/// /companies                                 list, create
/// /companies/{id}                            get, update, delete
/// /companies/{id}/departments                list, create
/// /departments/{id}                          get, update, delete
///
/// /widgets                                   list, create
/// /widgets/reorder                           batch reorder (PUT)
/// /widgets/{id}                              update, delete
/// /widgets/data/{widget_type}                data feed (GET)
///
/// /daily-tasks                               list, create
/// /daily-tasks/summary                       completion summary (GET)
/// /daily-tasks/{id}                          update, delete
/// /daily-tasks/{id}/start                    start instance (PUT)
/// /daily-tasks/{id}/complete                 complete instance (PUT)
/// /daily-tasks/{id}/skip                     skip instance (PUT)
/// /daily-tasks/{id}/instances                instance history (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/boards", boards::router())
        .nest("/lists", lists::router())
        .nest("/cards", cards::router())
        .nest("/labels", labels::router())
        .nest("/members", members::router())
        .nest("/companies", companies::router())
        .nest("/departments", departments::router())
        .nest("/widgets", widgets::router())
        .nest("/daily-tasks", daily_tasks::router())
}
