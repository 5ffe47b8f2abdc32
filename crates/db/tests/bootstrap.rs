use sqlx::SqlitePool;
use tasklane_db::bootstrap;

/// Full bootstrap: migrate, seed, verify the seed rows exist.
#[sqlx::test(migrations = "../../migrations")]
async fn test_seed_bootstrap(pool: SqlitePool) {
    tasklane_db::health_check(&pool).await.unwrap();

    bootstrap::seed(&pool).await.unwrap();

    let (boards,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM boards WHERE id = ?")
        .bind(bootstrap::SEED_BOARD_ID)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(boards, 1, "seed board should exist");

    let (lists,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lists WHERE board_id = ?")
        .bind(bootstrap::SEED_BOARD_ID)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(lists, 3, "seed board should have three lists");

    let (members,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(members, 2, "two sample members expected");
}

/// Running the bootstrap twice must not duplicate anything.
#[sqlx::test(migrations = "../../migrations")]
async fn test_seed_is_idempotent(pool: SqlitePool) {
    bootstrap::seed(&pool).await.unwrap();
    bootstrap::seed(&pool).await.unwrap();

    let (lists,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lists")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(lists, 3);

    let (companies,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM companies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(companies, 1);
}
