//! HTTP-level tests for cards: checklist operations, move/copy
//! destination validation, and reorder validation.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_board, create_card, create_list, delete, get, post_json, put_json,
    register_member,
};
use sqlx::SqlitePool;

/// Checklist items go through append, patch, and remove, always
/// returning the updated card.
#[sqlx::test(migrations = "../../migrations")]
async fn test_checklist_lifecycle(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;
    let board_id = create_board(&app, &token, "Board").await;
    let list_id = create_list(&app, &token, &board_id, "Todo").await;
    let card_id = create_card(&app, &token, &list_id, "Card").await;

    // Append two items.
    let body = serde_json::json!({ "text": "first step" });
    let response =
        post_json(&app, &format!("/api/v1/cards/{card_id}/checklist"), Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = serde_json::json!({ "text": "second step" });
    let response =
        post_json(&app, &format!("/api/v1/cards/{card_id}/checklist"), Some(&token), body).await;
    let json = body_json(response).await;

    let items = json["data"]["checklist_items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["text"], "first step");
    assert_eq!(items[0]["checked"], false);
    let item_id = items[0]["id"].as_str().unwrap().to_string();

    // Patch: check off the first item without touching its text.
    let body = serde_json::json!({ "checked": true });
    let uri = format!("/api/v1/cards/{card_id}/checklist/{item_id}");
    let response = put_json(&app, &uri, Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["checklist_items"][0]["checked"], true);
    assert_eq!(json["data"]["checklist_items"][0]["text"], "first step");

    // Remove it.
    let response = delete(&app, &uri, Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["data"]["checklist_items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["text"], "second step");
}

/// Patching or deleting an unknown checklist item id is a 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_checklist_unknown_item(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;
    let board_id = create_board(&app, &token, "Board").await;
    let list_id = create_list(&app, &token, &board_id, "Todo").await;
    let card_id = create_card(&app, &token, &list_id, "Card").await;

    let body = serde_json::json!({ "checked": true });
    let uri = format!("/api/v1/cards/{card_id}/checklist/no-such-item");
    let response = put_json(&app, &uri, Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&app, &uri, Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Moving a card to a list that belongs to a different board than the
/// one named in the payload is rejected.
#[sqlx::test(migrations = "../../migrations")]
async fn test_move_destination_validated(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;

    let board_a = create_board(&app, &token, "Board A").await;
    let board_b = create_board(&app, &token, "Board B").await;
    let list_a = create_list(&app, &token, &board_a, "A1").await;
    let list_b = create_list(&app, &token, &board_b, "B1").await;
    let card_id = create_card(&app, &token, &list_a, "Card").await;

    // list_b belongs to board_b, not board_a.
    let body = serde_json::json!({ "list_id": list_b, "board_id": board_a });
    let response = put_json(&app, &format!("/api/v1/cards/{card_id}/move"), Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Correct pairing moves the card across boards.
    let body = serde_json::json!({ "list_id": list_b, "board_id": board_b });
    let response = put_json(&app, &format!("/api/v1/cards/{card_id}/move"), Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["board_id"].as_str().unwrap(), board_b);
    assert_eq!(json["data"]["list_id"].as_str().unwrap(), list_b);
}

/// Copying a card duplicates the checklist under a new id.
#[sqlx::test(migrations = "../../migrations")]
async fn test_copy_card(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;
    let board_id = create_board(&app, &token, "Board").await;
    let list_id = create_list(&app, &token, &board_id, "Todo").await;
    let card_id = create_card(&app, &token, &list_id, "Original").await;

    let body = serde_json::json!({ "text": "carried over" });
    post_json(&app, &format!("/api/v1/cards/{card_id}/checklist"), Some(&token), body).await;

    let body = serde_json::json!({ "list_id": list_id, "board_id": board_id });
    let response =
        post_json(&app, &format!("/api/v1/cards/{card_id}/copy"), Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_ne!(json["data"]["id"].as_str().unwrap(), card_id);
    assert_eq!(json["data"]["title"], "Original");
    assert_eq!(json["data"]["checklist_items"][0]["text"], "carried over");
}

/// A reorder naming a card from another list writes nothing and fails
/// with 400.
#[sqlx::test(migrations = "../../migrations")]
async fn test_card_reorder_validated(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;
    let board_id = create_board(&app, &token, "Board").await;
    let list_a = create_list(&app, &token, &board_id, "A").await;
    let list_b = create_list(&app, &token, &board_id, "B").await;

    let a1 = create_card(&app, &token, &list_a, "a1").await;
    let a2 = create_card(&app, &token, &list_a, "a2").await;
    let b1 = create_card(&app, &token, &list_b, "b1").await;

    // Foreign id in the sequence: rejected.
    let body = serde_json::json!({ "card_ids": [a1, b1] });
    let uri = format!("/api/v1/lists/{list_a}/cards/reorder");
    let response = put_json(&app, &uri, Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Valid reorder flips the two cards.
    let body = serde_json::json!({ "card_ids": [a2.clone(), a1] });
    let response = put_json(&app, &uri, Some(&token), body).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/boards/{board_id}"), Some(&token)).await;
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["lists"][0]["cards"][0]["id"].as_str().unwrap(),
        a2
    );
}

/// Attaching a label from another board is rejected; duplicate
/// attachment is a 400 conflict; detach of an unattached label is 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_label_attachment_rules(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_member(&app, "Ada", "ada@example.com").await;

    let board_a = create_board(&app, &token, "Board A").await;
    let board_b = create_board(&app, &token, "Board B").await;
    let list_a = create_list(&app, &token, &board_a, "Todo").await;
    let card_id = create_card(&app, &token, &list_a, "Card").await;

    let body = serde_json::json!({ "title": "urgent", "color": "#ff0000" });
    let response =
        post_json(&app, &format!("/api/v1/boards/{board_a}/labels"), Some(&token), body).await;
    let label_a = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let body = serde_json::json!({ "title": "other", "color": "#00ff00" });
    let response =
        post_json(&app, &format!("/api/v1/boards/{board_b}/labels"), Some(&token), body).await;
    let label_b = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Cross-board label: rejected.
    let uri = format!("/api/v1/cards/{card_id}/labels/{label_b}");
    let response = post_json(&app, &uri, Some(&token), serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Same-board label attaches once, then conflicts.
    let uri = format!("/api/v1/cards/{card_id}/labels/{label_a}");
    let response = post_json(&app, &uri, Some(&token), serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(&app, &uri, Some(&token), serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    // Detach works once, then 404.
    let response = delete(&app, &uri, Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete(&app, &uri, Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
