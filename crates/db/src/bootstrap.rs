//! Explicit, idempotent seed bootstrap.
//!
//! Run once at startup after migrations. Inserts a default public board
//! with three lists plus a sample company, department, and two members.
//! All rows use fixed ids and `INSERT OR IGNORE`, so running the
//! bootstrap again (or concurrently from two processes pointed at the
//! same file) is a no-op.

use crate::DbPool;

// Fixed seed ids so repeated runs hit the primary-key conflict path.
pub const SEED_BOARD_ID: &str = "00000000-0000-4000-8000-000000000001";
pub const SEED_COMPANY_ID: &str = "00000000-0000-4000-8000-000000000010";
pub const SEED_DEPARTMENT_ID: &str = "00000000-0000-4000-8000-000000000011";
pub const SEED_MEMBER_ALICE_ID: &str = "00000000-0000-4000-8000-000000000020";
pub const SEED_MEMBER_BOB_ID: &str = "00000000-0000-4000-8000-000000000021";

const SEED_LIST_IDS: [(&str, &str, i64); 3] = [
    ("00000000-0000-4000-8000-000000000002", "To Do", 0),
    ("00000000-0000-4000-8000-000000000003", "In Progress", 1),
    ("00000000-0000-4000-8000-000000000004", "Done", 2),
];

// Argon2id hash of "changeme" -- seed members are placeholders for local
// development, not real accounts.
const SEED_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dGFza2xhbmUtc2VlZC0wMQ$f/q+eogoDDlJRL1J8sJMgmkRItwx0kTxY/5gxGxvqXw";

/// Seed the default rows. Safe to call on every startup.
pub async fn seed(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT OR IGNORE INTO companies (id, name, description) VALUES (?, ?, ?)",
    )
    .bind(SEED_COMPANY_ID)
    .bind("Acme Inc")
    .bind("Sample company")
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT OR IGNORE INTO departments (id, company_id, name, description) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(SEED_DEPARTMENT_ID)
    .bind(SEED_COMPANY_ID)
    .bind("Engineering")
    .bind("Sample department")
    .execute(&mut *tx)
    .await?;

    for (id, name, email) in [
        (SEED_MEMBER_ALICE_ID, "Alice Example", "alice@example.com"),
        (SEED_MEMBER_BOB_ID, "Bob Example", "bob@example.com"),
    ] {
        sqlx::query(
            "INSERT OR IGNORE INTO members \
             (id, name, email, password_hash, company_id, department_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(SEED_PASSWORD_HASH)
        .bind(SEED_COMPANY_ID)
        .bind(SEED_DEPARTMENT_ID)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query(
        "INSERT OR IGNORE INTO boards \
         (id, title, description, icon, is_public, company_id, department_id) \
         VALUES (?, ?, ?, ?, 1, ?, ?)",
    )
    .bind(SEED_BOARD_ID)
    .bind("Welcome Board")
    .bind("A public board to get you started")
    .bind("dashboard")
    .bind(SEED_COMPANY_ID)
    .bind(SEED_DEPARTMENT_ID)
    .execute(&mut *tx)
    .await?;

    for (id, title, position) in SEED_LIST_IDS {
        sqlx::query(
            "INSERT OR IGNORE INTO lists (id, board_id, title, position) VALUES (?, ?, ?, ?)",
        )
        .bind(id)
        .bind(SEED_BOARD_ID)
        .bind(title)
        .bind(position)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!("Seed bootstrap applied");
    Ok(())
}
