//! HTTP-level integration tests for the board lifecycle and the
//! aggregate view.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_board, create_card, create_list, delete, get, put_json, register_member};
use sqlx::SqlitePool;

/// A freshly created board aggregates to empty lists, labels, and
/// members -- the owner holds admin rights without a membership row.
#[sqlx::test(migrations = "../../migrations")]
async fn test_fresh_board_aggregate_is_empty(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;

    let board_id = create_board(&app, &token, "Release Planning").await;

    let response = get(&app, &format!("/api/v1/boards/{board_id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Release Planning");
    assert_eq!(json["data"]["lists"], serde_json::json!([]));
    assert_eq!(json["data"]["labels"], serde_json::json!([]));
    assert_eq!(json["data"]["members"], serde_json::json!([]));
}

/// The aggregate nests cards under their lists in position order.
#[sqlx::test(migrations = "../../migrations")]
async fn test_aggregate_nests_lists_and_cards(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;

    let board_id = create_board(&app, &token, "Sprint").await;
    let todo = create_list(&app, &token, &board_id, "Todo").await;
    let doing = create_list(&app, &token, &board_id, "Doing").await;
    create_card(&app, &token, &todo, "Write docs").await;
    create_card(&app, &token, &todo, "Fix bug").await;
    create_card(&app, &token, &doing, "Ship release").await;

    let response = get(&app, &format!("/api/v1/boards/{board_id}"), Some(&token)).await;
    let json = body_json(response).await;

    let lists = json["data"]["lists"].as_array().expect("lists array");
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0]["title"], "Todo");
    assert_eq!(lists[1]["title"], "Doing");
    assert_eq!(lists[0]["cards"].as_array().unwrap().len(), 2);
    assert_eq!(lists[0]["cards"][0]["title"], "Write docs");
    assert_eq!(lists[0]["cards"][1]["title"], "Fix bug");
    assert_eq!(lists[1]["cards"][0]["title"], "Ship release");
    assert_eq!(
        json["data"]["lists"][1]["id"].as_str().unwrap(),
        doing,
        "list ids must round-trip"
    );
}

/// Private boards are hidden from non-members; flipping `is_public`
/// makes them visible to everyone.
#[sqlx::test(migrations = "../../migrations")]
async fn test_list_boards_visibility(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (ada, _) = register_member(&app, "Ada", "ada@example.com").await;
    let (bob, _) = register_member(&app, "Bob", "bob@example.com").await;

    let body = serde_json::json!({ "title": "Ada Private", "is_public": false });
    let response = common::post_json(&app, "/api/v1/boards", Some(&ada), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let private_id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Bob sees no boards: Ada's board is private and he is not a member.
    let response = get(&app, "/api/v1/boards", Some(&bob)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    // Making it public makes it visible to everyone.
    let body = serde_json::json!({ "is_public": true });
    let response = put_json(&app, &format!("/api/v1/boards/{private_id}"), Some(&ada), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/api/v1/boards", Some(&bob)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Ada Private");
}

/// Updating and deleting a board; a deleted board's aggregate is 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_board_update_and_delete(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;
    let board_id = create_board(&app, &token, "Old Title").await;

    let body = serde_json::json!({ "title": "New Title", "icon": "rocket" });
    let response = put_json(&app, &format!("/api/v1/boards/{board_id}"), Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "New Title");
    assert_eq!(json["data"]["icon"], "rocket");

    let response = delete(&app, &format!("/api/v1/boards/{board_id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/boards/{board_id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// An unknown board id is a 404 with the standard error shape.
#[sqlx::test(migrations = "../../migrations")]
async fn test_missing_board_is_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;

    let response = get(&app, "/api/v1/boards/no-such-board", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].is_string());
}

/// The Gantt view returns scheduling fields for non-archived cards.
#[sqlx::test(migrations = "../../migrations")]
async fn test_board_gantt(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;
    let board_id = create_board(&app, &token, "Roadmap").await;
    let list_id = create_list(&app, &token, &board_id, "Q3").await;

    let body = serde_json::json!({
        "title": "Migration",
        "start_date": "2026-09-01",
        "end_date": "2026-09-15",
    });
    let response =
        common::post_json(&app, &format!("/api/v1/lists/{list_id}/cards"), Some(&token), body)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(&app, &format!("/api/v1/boards/{board_id}/gantt"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().expect("gantt rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Migration");
    assert_eq!(rows[0]["list_title"], "Q3");
    assert_eq!(rows[0]["start_date"], "2026-09-01");
}
