//! Integration tests for daily tasks, instance upserts, and the summary.

use sqlx::SqlitePool;
use tasklane_core::daily::{DailySummary, InstanceStatus};
use tasklane_db::models::daily_task::CreateDailyTask;
use tasklane_db::models::member::CreateMember;
use tasklane_db::repositories::{DailyTaskRepo, MemberRepo};

async fn create_member(pool: &SqlitePool) -> String {
    MemberRepo::create(
        pool,
        &CreateMember {
            name: "M".into(),
            email: "m@test.com".into(),
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

fn new_task(title: &str) -> CreateDailyTask {
    CreateDailyTask {
        title: title.into(),
        description: None,
        frequency: None,
        start_date: None,
        end_date: None,
    }
}

/// Upserting the same (task, date) twice keeps a single instance with the
/// latest status; completed_at is stamped only while completed.
#[sqlx::test(migrations = "../../migrations")]
async fn test_instance_upsert_is_unique_per_date(pool: SqlitePool) {
    let member_id = create_member(&pool).await;
    let task = DailyTaskRepo::create(&pool, &member_id, &new_task("stretch")).await.unwrap();

    let started =
        DailyTaskRepo::upsert_instance(&pool, &task.id, "2026-08-28", InstanceStatus::InProgress, None)
            .await
            .unwrap();
    assert_eq!(started.status, "in_progress");
    assert!(started.started_at.is_some());
    assert!(started.completed_at.is_none());

    let completed =
        DailyTaskRepo::upsert_instance(&pool, &task.id, "2026-08-28", InstanceStatus::Completed, None)
            .await
            .unwrap();
    assert_eq!(completed.id, started.id, "same calendar date, same instance");
    assert_eq!(completed.status, "completed");
    assert!(completed.started_at.is_some(), "start stamp survives completion");
    assert!(completed.completed_at.is_some());

    let instances = DailyTaskRepo::instances(&pool, &task.id).await.unwrap();
    assert_eq!(instances.len(), 1);
}

/// 3 active tasks, 1 completed, 1 in_progress, 1 untouched: counts sum to
/// total and the rate is 100/3.
#[sqlx::test(migrations = "../../migrations")]
async fn test_summary_counts(pool: SqlitePool) {
    let member_id = create_member(&pool).await;
    let date = "2026-08-28";

    let t1 = DailyTaskRepo::create(&pool, &member_id, &new_task("one")).await.unwrap();
    let t2 = DailyTaskRepo::create(&pool, &member_id, &new_task("two")).await.unwrap();
    let _t3 = DailyTaskRepo::create(&pool, &member_id, &new_task("three")).await.unwrap();

    DailyTaskRepo::upsert_instance(&pool, &t1.id, date, InstanceStatus::Completed, None)
        .await
        .unwrap();
    DailyTaskRepo::upsert_instance(&pool, &t2.id, date, InstanceStatus::InProgress, None)
        .await
        .unwrap();

    let counts = DailyTaskRepo::summary_counts(&pool, &member_id, date).await.unwrap();
    let summary = DailySummary::compute(
        date.into(),
        counts.total_tasks,
        counts.completed,
        counts.in_progress,
        counts.skipped,
    );

    assert_eq!(summary.total_tasks, 3);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.pending, 1);
    assert!((summary.completion_rate - 100.0 / 3.0).abs() < 1e-9);
}

/// Tasks outside their start/end window are excluded from the total.
#[sqlx::test(migrations = "../../migrations")]
async fn test_summary_respects_date_window(pool: SqlitePool) {
    let member_id = create_member(&pool).await;

    let mut windowed = new_task("future");
    windowed.start_date = Some("2030-01-01".into());
    DailyTaskRepo::create(&pool, &member_id, &windowed).await.unwrap();
    DailyTaskRepo::create(&pool, &member_id, &new_task("open")).await.unwrap();

    let counts = DailyTaskRepo::summary_counts(&pool, &member_id, "2026-08-28").await.unwrap();
    assert_eq!(counts.total_tasks, 1, "future-windowed task must not count");
}

/// Inactive tasks drop out of both listing totals and the summary.
#[sqlx::test(migrations = "../../migrations")]
async fn test_deactivated_task_excluded(pool: SqlitePool) {
    let member_id = create_member(&pool).await;
    let task = DailyTaskRepo::create(&pool, &member_id, &new_task("paused")).await.unwrap();

    DailyTaskRepo::update(
        &pool,
        &task.id,
        &member_id,
        &tasklane_db::models::daily_task::UpdateDailyTask {
            title: None,
            description: None,
            frequency: None,
            start_date: None,
            end_date: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap()
    .unwrap();

    let counts = DailyTaskRepo::summary_counts(&pool, &member_id, "2026-08-28").await.unwrap();
    assert_eq!(counts.total_tasks, 0);
}
