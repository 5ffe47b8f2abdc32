//! Integration tests for list/card reorder and checklist persistence.

use sqlx::SqlitePool;
use tasklane_core::checklist;
use tasklane_core::ordering::validate_reorder;
use tasklane_db::models::board::CreateBoard;
use tasklane_db::models::card::CreateCard;
use tasklane_db::models::list::CreateList;
use tasklane_db::models::member::CreateMember;
use tasklane_db::repositories::{BoardRepo, CardRepo, ListRepo, MemberRepo};

async fn setup_board(pool: &SqlitePool) -> (String, String) {
    let owner = MemberRepo::create(
        pool,
        &CreateMember {
            name: "Owner".into(),
            email: "owner@test.com".into(),
            password_hash: "$argon2id$test".into(),
            avatar: None,
            company_id: None,
            department_id: None,
        },
    )
    .await
    .unwrap();
    let board = BoardRepo::create(
        pool,
        &owner.id,
        &CreateBoard {
            title: "Board".into(),
            description: None,
            icon: None,
            is_public: Some(true),
            company_id: None,
            department_id: None,
        },
    )
    .await
    .unwrap();
    (owner.id, board.id)
}

fn new_card(title: &str) -> CreateCard {
    CreateCard {
        title: title.into(),
        description: None,
        position: None,
        due_date: None,
        start_date: None,
        end_date: None,
        card_type: None,
        status: None,
        member_id: None,
        dependencies: None,
    }
}

/// Reordering [C, A, B] assigns positions C:0, A:1, B:2 and the new order
/// survives a re-read.
#[sqlx::test(migrations = "../../migrations")]
async fn test_list_reorder_assigns_index_positions(pool: SqlitePool) {
    let (_, board_id) = setup_board(&pool).await;
    let mut ids = Vec::new();
    for title in ["A", "B", "C"] {
        let list = ListRepo::create(
            &pool,
            &board_id,
            &CreateList {
                title: title.into(),
                position: None,
            },
        )
        .await
        .unwrap();
        ids.push(list.id);
    }

    let new_order = vec![ids[2].clone(), ids[0].clone(), ids[1].clone()];
    let existing = ListRepo::ids_for_board(&pool, &board_id).await.unwrap();
    validate_reorder(&new_order, &existing).unwrap();
    ListRepo::reorder(&pool, &board_id, &new_order).await.unwrap();

    let reread = ListRepo::ids_for_board(&pool, &board_id).await.unwrap();
    assert_eq!(reread, new_order);

    let c = ListRepo::find_by_id(&pool, &ids[2]).await.unwrap().unwrap();
    assert_eq!(c.position, 0);
}

/// An id from another board fails validation, and even a direct reorder
/// call cannot write it thanks to the WHERE guard.
#[sqlx::test(migrations = "../../migrations")]
async fn test_reorder_rejects_foreign_ids(pool: SqlitePool) {
    let (owner_id, board_id) = setup_board(&pool).await;
    let other_board = BoardRepo::create(
        &pool,
        &owner_id,
        &CreateBoard {
            title: "Other".into(),
            description: None,
            icon: None,
            is_public: Some(true),
            company_id: None,
            department_id: None,
        },
    )
    .await
    .unwrap();

    let mine = ListRepo::create(
        &pool,
        &board_id,
        &CreateList {
            title: "Mine".into(),
            position: None,
        },
    )
    .await
    .unwrap();
    let foreign = ListRepo::create(
        &pool,
        &other_board.id,
        &CreateList {
            title: "Foreign".into(),
            position: Some(42),
        },
    )
    .await
    .unwrap();

    let existing = ListRepo::ids_for_board(&pool, &board_id).await.unwrap();
    let supplied = vec![mine.id.clone(), foreign.id.clone()];
    assert!(validate_reorder(&supplied, &existing).is_err());

    // Defense in depth: even bypassing validation, the foreign row is
    // untouched.
    ListRepo::reorder(&pool, &board_id, &supplied).await.unwrap();
    let untouched = ListRepo::find_by_id(&pool, &foreign.id).await.unwrap().unwrap();
    assert_eq!(untouched.position, 42);
}

/// Card reorder within a list mirrors list reorder.
#[sqlx::test(migrations = "../../migrations")]
async fn test_card_reorder(pool: SqlitePool) {
    let (_, board_id) = setup_board(&pool).await;
    let list = ListRepo::create(
        &pool,
        &board_id,
        &CreateList {
            title: "L".into(),
            position: None,
        },
    )
    .await
    .unwrap();

    let a = CardRepo::create(&pool, &list.id, &board_id, &new_card("a")).await.unwrap();
    let b = CardRepo::create(&pool, &list.id, &board_id, &new_card("b")).await.unwrap();

    CardRepo::reorder(&pool, &list.id, &board_id, &[b.id.clone(), a.id.clone()])
        .await
        .unwrap();

    let order = CardRepo::ids_for_list(&pool, &list.id).await.unwrap();
    assert_eq!(order, vec![b.id, a.id]);
}

/// Add then complete a checklist item: exactly one item, same id,
/// checked=true, persisted through the typed JSON column.
#[sqlx::test(migrations = "../../migrations")]
async fn test_checklist_round_trip(pool: SqlitePool) {
    let (_, board_id) = setup_board(&pool).await;
    let list = ListRepo::create(
        &pool,
        &board_id,
        &CreateList {
            title: "L".into(),
            position: None,
        },
    )
    .await
    .unwrap();
    let card = CardRepo::create(&pool, &list.id, &board_id, &new_card("c")).await.unwrap();

    // Add.
    let mut items = card.checklist_items.0.clone();
    let added = checklist::add_item(&mut items, "step one".into());
    CardRepo::save_checklist(&pool, &card.id, &items).await.unwrap().unwrap();

    // Complete.
    let card = CardRepo::find_by_id(&pool, &card.id).await.unwrap().unwrap();
    let mut items = card.checklist_items.0.clone();
    checklist::patch_item(
        &mut items,
        &added.id,
        &checklist::ChecklistItemPatch {
            text: None,
            checked: Some(true),
        },
    )
    .unwrap();
    let saved = CardRepo::save_checklist(&pool, &card.id, &items).await.unwrap().unwrap();

    assert_eq!(saved.checklist_items.0.len(), 1);
    assert_eq!(saved.checklist_items.0[0].id, added.id);
    assert!(saved.checklist_items.0[0].checked);
}
