//! Integration tests for card time tracking: session open/close, total
//! accumulation, history, and reset.

use sqlx::SqlitePool;
use tasklane_core::timelog::TrackAction;
use tasklane_db::models::board::CreateBoard;
use tasklane_db::models::card::{Card, CreateCard};
use tasklane_db::models::list::CreateList;
use tasklane_db::models::member::CreateMember;
use tasklane_db::repositories::{BoardRepo, CardRepo, ListRepo, MemberRepo, TimeEntryRepo};

async fn setup_card(pool: &SqlitePool) -> (String, Card) {
    let member = MemberRepo::create(
        pool,
        &CreateMember {
            name: "Tracker".into(),
            email: "tracker@test.com".into(),
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
        &member.id,
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
    let list = ListRepo::create(
        pool,
        &board.id,
        &CreateList {
            title: "List".into(),
            position: None,
        },
    )
    .await
    .unwrap();
    let card = CardRepo::create(
        pool,
        &list.id,
        &board.id,
        &CreateCard {
            title: "Card".into(),
            description: None,
            position: None,
            due_date: None,
            start_date: None,
            end_date: None,
            card_type: None,
            status: None,
            member_id: None,
            dependencies: None,
        },
    )
    .await
    .unwrap();
    (member.id, card)
}

/// A fresh card carries no tracking state.
#[sqlx::test(migrations = "../../migrations")]
async fn test_new_card_is_idle(pool: SqlitePool) {
    let (_, card) = setup_card(&pool).await;

    assert_eq!(card.total_time_spent, 0);
    assert!(!card.is_tracking);
    assert!(card.tracking_started_at.is_none());
}

/// Opening a session stamps the card; closing it records a duration
/// entry, folds the seconds into the total, and clears the session.
#[sqlx::test(migrations = "../../migrations")]
async fn test_session_open_close_folds_into_total(pool: SqlitePool) {
    let (member_id, card) = setup_card(&pool).await;

    let opened = TimeEntryRepo::open_session(&pool, &card, &member_id, TrackAction::Start, None)
        .await
        .unwrap();
    assert_eq!(opened.action, "start");
    assert!(opened.started_at.is_some());
    assert!(opened.ended_at.is_none());

    let tracking = CardRepo::find_by_id(&pool, &card.id).await.unwrap().unwrap();
    assert!(tracking.is_tracking);
    assert!(tracking.tracking_started_at.is_some());

    let secs = TimeEntryRepo::current_session_secs(&pool, &card.id).await.unwrap();
    assert!(secs >= 0);

    let closed = TimeEntryRepo::close_session(
        &pool,
        &tracking,
        &member_id,
        TrackAction::Stop,
        Some("done for now"),
    )
    .await
    .unwrap();
    assert_eq!(closed.action, "stop");
    assert!(closed.started_at.is_some());
    assert!(closed.ended_at.is_some());
    assert!(closed.duration >= 0);
    assert_eq!(closed.note.as_deref(), Some("done for now"));

    let idle = CardRepo::find_by_id(&pool, &card.id).await.unwrap().unwrap();
    assert!(!idle.is_tracking);
    assert!(idle.tracking_started_at.is_none());
    assert_eq!(idle.total_time_spent, closed.duration);
}

/// History returns every recorded action, most recent first.
#[sqlx::test(migrations = "../../migrations")]
async fn test_history_lists_actions_most_recent_first(pool: SqlitePool) {
    let (member_id, card) = setup_card(&pool).await;

    TimeEntryRepo::open_session(&pool, &card, &member_id, TrackAction::Start, None)
        .await
        .unwrap();
    let tracking = CardRepo::find_by_id(&pool, &card.id).await.unwrap().unwrap();
    TimeEntryRepo::close_session(&pool, &tracking, &member_id, TrackAction::Pause, None)
        .await
        .unwrap();
    let idle = CardRepo::find_by_id(&pool, &card.id).await.unwrap().unwrap();
    TimeEntryRepo::open_session(&pool, &idle, &member_id, TrackAction::Resume, None)
        .await
        .unwrap();

    let history = TimeEntryRepo::history(&pool, &card.id).await.unwrap();
    let actions: Vec<&str> = history.iter().map(|e| e.action.as_str()).collect();
    assert_eq!(actions, ["resume", "pause", "start"]);
}

/// Reset zeroes the total and closes the open session, but keeps the
/// history rows.
#[sqlx::test(migrations = "../../migrations")]
async fn test_reset_zeroes_total_and_keeps_history(pool: SqlitePool) {
    let (member_id, card) = setup_card(&pool).await;

    TimeEntryRepo::open_session(&pool, &card, &member_id, TrackAction::Start, None)
        .await
        .unwrap();
    let tracking = CardRepo::find_by_id(&pool, &card.id).await.unwrap().unwrap();
    TimeEntryRepo::close_session(&pool, &tracking, &member_id, TrackAction::Stop, None)
        .await
        .unwrap();
    TimeEntryRepo::open_session(
        &pool,
        &CardRepo::find_by_id(&pool, &card.id).await.unwrap().unwrap(),
        &member_id,
        TrackAction::Start,
        None,
    )
    .await
    .unwrap();

    let current = CardRepo::find_by_id(&pool, &card.id).await.unwrap().unwrap();
    let reset = TimeEntryRepo::reset(&pool, &current).await.unwrap().unwrap();
    assert_eq!(reset.total_time_spent, 0);
    assert!(!reset.is_tracking);
    assert!(reset.tracking_started_at.is_none());

    let history = TimeEntryRepo::history(&pool, &card.id).await.unwrap();
    assert_eq!(history.len(), 3, "reset does not erase the audit trail");
}

/// Deleting a card cascades to its time entries.
#[sqlx::test(migrations = "../../migrations")]
async fn test_card_delete_cascades_to_entries(pool: SqlitePool) {
    let (member_id, card) = setup_card(&pool).await;

    TimeEntryRepo::open_session(&pool, &card, &member_id, TrackAction::Start, None)
        .await
        .unwrap();
    CardRepo::delete(&pool, &card.id).await.unwrap();

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM card_time_entries WHERE card_id = ?")
            .bind(&card.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 0);
}
