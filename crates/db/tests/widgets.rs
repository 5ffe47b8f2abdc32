//! Integration tests for widget ownership scoping and reorder.

use sqlx::SqlitePool;
use tasklane_db::models::member::CreateMember;
use tasklane_db::models::widget::{CreateWidget, WidgetPosition};
use tasklane_db::repositories::{MemberRepo, WidgetRepo};

async fn create_member(pool: &SqlitePool, email: &str) -> String {
    MemberRepo::create(
        pool,
        &CreateMember {
            name: "M".into(),
            email: email.into(),
            password_hash: "$argon2id$test".into(),
            avatar: None,
            company_id: None,
            department_id: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn new_widget(title: &str) -> CreateWidget {
    CreateWidget {
        widget_type: "status_chart".into(),
        title: title.into(),
        config: None,
        position: None,
    }
}

/// Widgets are invisible across members, and a reorder pair naming
/// another member's widget is a silent no-op.
#[sqlx::test(migrations = "../../migrations")]
async fn test_reorder_is_ownership_scoped(pool: SqlitePool) {
    let alice = create_member(&pool, "alice@test.com").await;
    let bob = create_member(&pool, "bob@test.com").await;

    let mine = WidgetRepo::create(&pool, &alice, &new_widget("mine")).await.unwrap();
    let theirs = WidgetRepo::create(&pool, &bob, &new_widget("theirs")).await.unwrap();

    assert!(WidgetRepo::find_for_member(&pool, &theirs.id, &alice)
        .await
        .unwrap()
        .is_none());

    WidgetRepo::reorder(
        &pool,
        &alice,
        &[
            WidgetPosition {
                id: mine.id.clone(),
                position: 5,
            },
            WidgetPosition {
                id: theirs.id.clone(),
                position: 99,
            },
        ],
    )
    .await
    .unwrap();

    let mine = WidgetRepo::find_for_member(&pool, &mine.id, &alice).await.unwrap().unwrap();
    assert_eq!(mine.position, 5);

    let theirs = WidgetRepo::find_for_member(&pool, &theirs.id, &bob).await.unwrap().unwrap();
    assert_eq!(theirs.position, 0, "foreign pair must not be applied");
}
