//! HTTP-level tests for daily tasks: instance transitions and the
//! per-date completion summary.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json, register_member};
use sqlx::SqlitePool;

async fn create_task(app: &axum::Router, token: &str, title: &str) -> String {
    let body = serde_json::json!({ "title": title });
    let response = post_json(app, "/api/v1/daily-tasks", Some(token), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Completing a task upserts a single instance for the date; repeating
/// the transition does not create a second row.
#[sqlx::test(migrations = "../../migrations")]
async fn test_instance_upsert_is_unique_per_date(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;
    let task_id = create_task(&app, &token, "Standup").await;

    let body = serde_json::json!({ "date": "2026-08-28" });
    let uri = format!("/api/v1/daily-tasks/{task_id}/complete");
    let response = put_json(&app, &uri, Some(&token), body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "completed");
    assert!(json["data"]["completed_at"].is_string());

    // Start again on the same date: same instance, new status.
    let uri = format!("/api/v1/daily-tasks/{task_id}/start");
    let response = put_json(&app, &uri, Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "in_progress");

    let response = get(
        &app,
        &format!("/api/v1/daily-tasks/{task_id}/instances"),
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// The summary derives pending tasks and the completion rate.
#[sqlx::test(migrations = "../../migrations")]
async fn test_summary_counts(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;

    let t1 = create_task(&app, &token, "Standup").await;
    let t2 = create_task(&app, &token, "Review PRs").await;
    create_task(&app, &token, "Inbox zero").await;

    let date = serde_json::json!({ "date": "2026-08-28" });
    put_json(
        &app,
        &format!("/api/v1/daily-tasks/{t1}/complete"),
        Some(&token),
        date.clone(),
    )
    .await;
    put_json(
        &app,
        &format!("/api/v1/daily-tasks/{t2}/skip"),
        Some(&token),
        date,
    )
    .await;

    let response = get(
        &app,
        "/api/v1/daily-tasks/summary?date=2026-08-28",
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["date"], "2026-08-28");
    assert_eq!(json["data"]["total_tasks"], 3);
    assert_eq!(json["data"]["completed"], 1);
    assert_eq!(json["data"]["skipped"], 1);
    assert_eq!(json["data"]["in_progress"], 0);
    assert_eq!(json["data"]["pending"], 1);
    let rate = json["data"]["completion_rate"].as_f64().unwrap();
    assert!((rate - 100.0 / 3.0).abs() < 1e-9);
}

/// Tasks are scoped to their owner: another member's task id is a 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_tasks_are_member_scoped(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (ada, _) = register_member(&app, "Ada", "ada@example.com").await;
    let (bob, _) = register_member(&app, "Bob", "bob@example.com").await;

    let task_id = create_task(&app, &ada, "Ada's task").await;

    let body = serde_json::json!({ "title": "stolen" });
    let response = put_json(&app, &format!("/api/v1/daily-tasks/{task_id}"), Some(&bob), body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/api/v1/daily-tasks", Some(&bob)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

/// A date window on the task definition excludes it from summaries
/// outside the window.
#[sqlx::test(migrations = "../../migrations")]
async fn test_summary_respects_date_window(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;

    let body = serde_json::json!({
        "title": "Sprint ritual",
        "start_date": "2026-09-01",
        "end_date": "2026-09-14",
    });
    let response = post_json(&app, "/api/v1/daily-tasks", Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(
        &app,
        "/api/v1/daily-tasks/summary?date=2026-08-28",
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_tasks"], 0);
    assert_eq!(json["data"]["completion_rate"], 0.0);

    let response = get(
        &app,
        "/api/v1/daily-tasks/summary?date=2026-09-05",
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_tasks"], 1);
}
