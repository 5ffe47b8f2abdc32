//! Repository for the `boards` table and the board aggregate view.

use sqlx::{SqliteConnection, SqlitePool};
use tasklane_core::types::{new_id, DbId};

use crate::models::board::{
    Board, BoardAggregate, BoardMemberInfo, CreateBoard, GanttRow, ListWithCards, UpdateBoard,
};
use crate::models::card::{Card, CardWithLabels};
use crate::models::label::Label;
use crate::models::list::List;

/// Column list for `boards` queries.
const BOARD_COLUMNS: &str = "\
    id, title, description, icon, is_public, owner_id, \
    company_id, department_id, last_activity, created_at";

/// SQLite expression producing the canonical timestamp format used by all
/// column defaults. Written this way so every stored timestamp sorts
/// lexicographically.
pub(crate) const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

/// Provides CRUD, the aggregate read, visibility listing, and the
/// `last_activity` touch for boards.
pub struct BoardRepo;

impl BoardRepo {
    /// Create a board owned by `owner_id`. The owner is not given a
    /// membership row; the guards treat ownership as an implicit admin.
    pub async fn create(
        pool: &SqlitePool,
        owner_id: &str,
        input: &CreateBoard,
    ) -> Result<Board, sqlx::Error> {
        let query = format!(
            "INSERT INTO boards \
             (id, title, description, icon, is_public, owner_id, company_id, department_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {BOARD_COLUMNS}"
        );
        sqlx::query_as::<_, Board>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.is_public.unwrap_or(true))
            .bind(owner_id)
            .bind(&input.company_id)
            .bind(&input.department_id)
            .fetch_one(pool)
            .await
    }

    /// Boards visible to `member_id`: public, owned, or member-of.
    /// Most recently active first.
    pub async fn list_visible(
        pool: &SqlitePool,
        member_id: &str,
    ) -> Result<Vec<Board>, sqlx::Error> {
        sqlx::query_as::<_, Board>(
            "SELECT DISTINCT b.id, b.title, b.description, b.icon, b.is_public, b.owner_id, \
                    b.company_id, b.department_id, b.last_activity, b.created_at \
             FROM boards b \
             LEFT JOIN board_members bm ON bm.board_id = b.id AND bm.member_id = ?1 \
             WHERE b.is_public = 1 OR b.owner_id = ?1 OR bm.id IS NOT NULL \
             ORDER BY b.last_activity DESC",
        )
        .bind(member_id)
        .fetch_all(pool)
        .await
    }

    /// Find a board by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Board>, sqlx::Error> {
        let query = format!("SELECT {BOARD_COLUMNS} FROM boards WHERE id = ?");
        sqlx::query_as::<_, Board>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a board's mutable fields. Omitted fields are kept.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        input: &UpdateBoard,
    ) -> Result<Option<Board>, sqlx::Error> {
        let query = format!(
            "UPDATE boards SET \
                title = COALESCE(?, title), \
                description = COALESCE(?, description), \
                icon = COALESCE(?, icon), \
                is_public = COALESCE(?, is_public), \
                last_activity = {NOW} \
             WHERE id = ? \
             RETURNING {BOARD_COLUMNS}"
        );
        sqlx::query_as::<_, Board>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.is_public)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a board. Lists, cards, labels, and memberships cascade.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the board's `last_activity` to now. Called inside the same
    /// transaction as any mutation of the board's lists, cards, labels,
    /// or memberships.
    pub async fn touch(conn: &mut SqliteConnection, board_id: &str) -> Result<(), sqlx::Error> {
        let query = format!("UPDATE boards SET last_activity = {NOW} WHERE id = ?");
        sqlx::query(&query).bind(board_id).execute(conn).await?;
        Ok(())
    }

    /// Assemble the full board tree in one transaction so the sub-reads
    /// see a single snapshot. Returns `None` when the board row is absent.
    pub async fn aggregate(
        pool: &SqlitePool,
        board_id: &str,
    ) -> Result<Option<BoardAggregate>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {BOARD_COLUMNS} FROM boards WHERE id = ?");
        let Some(board) = sqlx::query_as::<_, Board>(&query)
            .bind(board_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let lists = sqlx::query_as::<_, List>(
            "SELECT id, board_id, title, position, archived, created_at \
             FROM lists WHERE board_id = ? AND archived = 0 ORDER BY position",
        )
        .bind(board_id)
        .fetch_all(&mut *tx)
        .await?;

        let cards = sqlx::query_as::<_, Card>(
            "SELECT id, list_id, board_id, title, description, position, due_date, \
                    start_date, end_date, card_type, status, member_id, dependencies, \
                    checklist_items, archived, total_time_spent, is_tracking, \
                    tracking_started_at, created_at \
             FROM cards WHERE board_id = ? AND archived = 0 ORDER BY position",
        )
        .bind(board_id)
        .fetch_all(&mut *tx)
        .await?;

        // Resolved labels per card, joined through the junction table.
        let card_labels = sqlx::query_as::<_, CardLabelRow>(
            "SELECT cl.card_id, \
                    l.id, l.board_id, l.title, l.color, l.created_at \
             FROM card_labels cl \
             JOIN labels l ON l.id = cl.label_id \
             JOIN cards c ON c.id = cl.card_id \
             WHERE c.board_id = ?",
        )
        .bind(board_id)
        .fetch_all(&mut *tx)
        .await?;

        let labels = sqlx::query_as::<_, Label>(
            "SELECT id, board_id, title, color, created_at \
             FROM labels WHERE board_id = ? ORDER BY created_at",
        )
        .bind(board_id)
        .fetch_all(&mut *tx)
        .await?;

        let members = sqlx::query_as::<_, BoardMemberInfo>(
            "SELECT bm.member_id, m.name, m.email, m.avatar, bm.role, bm.joined_at \
             FROM board_members bm \
             JOIN members m ON m.id = bm.member_id \
             WHERE bm.board_id = ? ORDER BY bm.joined_at",
        )
        .bind(board_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(assemble_aggregate(board, lists, cards, card_labels, labels, members)))
    }

    /// Flat Gantt rows: non-archived cards with their scheduling fields.
    pub async fn gantt(pool: &SqlitePool, board_id: &str) -> Result<Vec<GanttRow>, sqlx::Error> {
        sqlx::query_as::<_, GanttRow>(
            "SELECT c.id, c.title, c.list_id, l.title AS list_title, c.status, \
                    c.start_date, c.end_date, c.due_date, c.dependencies, c.member_id \
             FROM cards c \
             JOIN lists l ON l.id = c.list_id \
             WHERE c.board_id = ? AND c.archived = 0 AND l.archived = 0 \
             ORDER BY l.position, c.position",
        )
        .bind(board_id)
        .fetch_all(pool)
        .await
    }
}

/// A card-label junction row with the label columns flattened in.
#[derive(sqlx::FromRow)]
struct CardLabelRow {
    card_id: DbId,
    #[sqlx(flatten)]
    label: Label,
}

/// Group flat rows into the nested aggregate: cards under their lists,
/// labels under their cards.
fn assemble_aggregate(
    board: Board,
    lists: Vec<List>,
    cards: Vec<Card>,
    card_labels: Vec<CardLabelRow>,
    labels: Vec<Label>,
    members: Vec<BoardMemberInfo>,
) -> BoardAggregate {
    use std::collections::HashMap;

    let mut labels_by_card: HashMap<String, Vec<Label>> = HashMap::new();
    for row in card_labels {
        labels_by_card.entry(row.card_id).or_default().push(row.label);
    }

    let mut cards_by_list: HashMap<String, Vec<CardWithLabels>> = HashMap::new();
    for card in cards {
        let labels = labels_by_card.remove(&card.id).unwrap_or_default();
        cards_by_list
            .entry(card.list_id.clone())
            .or_default()
            .push(CardWithLabels { card, labels });
    }

    let lists = lists
        .into_iter()
        .map(|list| {
            let cards = cards_by_list.remove(&list.id).unwrap_or_default();
            ListWithCards { list, cards }
        })
        .collect();

    BoardAggregate {
        board,
        lists,
        labels,
        members,
    }
}
