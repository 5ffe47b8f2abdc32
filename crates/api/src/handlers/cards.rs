//! Handlers for the `/cards` resource: CRUD, archive/restore, move, copy,
//! reorder, and the embedded checklist operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasklane_core::checklist::{self, ChecklistItemPatch};
use tasklane_core::error::CoreError;
use tasklane_core::ordering::validate_reorder;
use tasklane_core::types::DbId;
use tasklane_db::models::card::{
    AddChecklistItem, Card, CardDestination, CreateCard, ReorderCards, UpdateCard,
};
use tasklane_db::repositories::{CardRepo, ListRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/lists/{id}/cards
///
/// Create a card in a list. Position defaults to one past the list's
/// current maximum.
pub async fn create_card(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
    Json(input): Json<CreateCard>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Card title must not be empty".into(),
        )));
    }

    let list = ListRepo::find_by_id(&state.pool, &list_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        }))?;

    let card = CardRepo::create(&state.pool, &list.id, &list.board_id, &input).await?;

    tracing::info!(card_id = %card.id, list_id = %list.id, member_id = %auth.member_id, "Card created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: card })))
}

/// PUT /api/v1/cards/{id}
///
/// Overwrite the supplied subset of card fields. Checklist items are
/// edited through the dedicated checklist endpoints.
pub async fn update_card(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
    Json(input): Json<UpdateCard>,
) -> AppResult<impl IntoResponse> {
    let card = CardRepo::update(&state.pool, &card_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))?;

    tracing::info!(card_id = %card.id, member_id = %auth.member_id, "Card updated");

    Ok(Json(DataResponse { data: card }))
}

/// DELETE /api/v1/cards/{id}
pub async fn delete_card(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CardRepo::delete(&state.pool, &card_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }));
    }

    tracing::info!(card_id = %card_id, member_id = %auth.member_id, "Card deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/cards/{id}/archive
pub async fn archive_card(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_archived(&state, &auth, card_id, true).await
}

/// PUT /api/v1/cards/{id}/restore
pub async fn restore_card(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_archived(&state, &auth, card_id, false).await
}

async fn set_archived(
    state: &AppState,
    auth: &AuthUser,
    card_id: DbId,
    archived: bool,
) -> AppResult<Json<DataResponse<Card>>> {
    let card = CardRepo::set_archived(&state.pool, &card_id, archived)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))?;

    tracing::info!(card_id = %card.id, member_id = %auth.member_id, archived, "Card archive state changed");

    Ok(Json(DataResponse { data: card }))
}

// ---------------------------------------------------------------------------
// Move / copy / reorder
// ---------------------------------------------------------------------------

/// Check that the destination list exists and belongs to the destination
/// board. Shared by move and copy.
async fn validate_destination(state: &AppState, dest: &CardDestination) -> AppResult<()> {
    let list = ListRepo::find_by_id(&state.pool, &dest.list_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "List",
                id: dest.list_id.clone(),
            })
        })?;

    if list.board_id != dest.board_id {
        return Err(AppError::Core(CoreError::Validation(
            "Destination list does not belong to the destination board".into(),
        )));
    }

    Ok(())
}

/// PUT /api/v1/cards/{id}/move
///
/// Re-home a card under a new list/board, keeping its position. Touches
/// both the source and the destination board.
pub async fn move_card(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
    Json(dest): Json<CardDestination>,
) -> AppResult<impl IntoResponse> {
    let card = CardRepo::find_by_id(&state.pool, &card_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))?;

    validate_destination(&state, &dest).await?;

    let moved = CardRepo::move_card(&state.pool, &card.id, &card.board_id, &dest)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card.id,
        }))?;

    tracing::info!(
        card_id = %moved.id,
        list_id = %moved.list_id,
        board_id = %moved.board_id,
        member_id = %auth.member_id,
        "Card moved"
    );

    Ok(Json(DataResponse { data: moved }))
}

/// POST /api/v1/cards/{id}/copy
///
/// Duplicate a card (checklist state verbatim, label associations copied)
/// under a new id at the destination.
pub async fn copy_card(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
    Json(dest): Json<CardDestination>,
) -> AppResult<impl IntoResponse> {
    let source = CardRepo::find_by_id(&state.pool, &card_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))?;

    validate_destination(&state, &dest).await?;

    let copy = CardRepo::copy(&state.pool, &source, &dest).await?;

    tracing::info!(
        card_id = %copy.id,
        source_id = %source.id,
        member_id = %auth.member_id,
        "Card copied"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: copy })))
}

/// PUT /api/v1/lists/{id}/cards/reorder
///
/// Rewrite card positions to the index of each id in the supplied order.
/// Every supplied id must be one of the list's cards, with no duplicates
/// and at least one id; cards not named keep their current positions.
pub async fn reorder_cards(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
    Json(input): Json<ReorderCards>,
) -> AppResult<impl IntoResponse> {
    let list = ListRepo::find_by_id(&state.pool, &list_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        }))?;

    let existing = CardRepo::ids_for_list(&state.pool, &list.id).await?;
    validate_reorder(&input.card_ids, &existing)?;

    CardRepo::reorder(&state.pool, &list.id, &list.board_id, &input.card_ids).await?;

    tracing::info!(
        list_id = %list.id,
        count = input.card_ids.len(),
        member_id = %auth.member_id,
        "Cards reordered"
    );

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Checklist items
// ---------------------------------------------------------------------------

/// POST /api/v1/cards/{id}/checklist
///
/// Append an unchecked item and return the updated card.
pub async fn add_checklist_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
    Json(input): Json<AddChecklistItem>,
) -> AppResult<impl IntoResponse> {
    if input.text.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Checklist item text must not be empty".into(),
        )));
    }

    let card = CardRepo::find_by_id(&state.pool, &card_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))?;

    let mut items = card.checklist_items.0.clone();
    checklist::add_item(&mut items, input.text);

    let updated = save_checklist(&state, &card.id, &items).await?;

    tracing::info!(card_id = %updated.id, member_id = %auth.member_id, "Checklist item added");

    Ok(Json(DataResponse { data: updated }))
}

/// PUT /api/v1/cards/{id}/checklist/{item_id}
///
/// Patch one checklist item by id; only supplied fields change.
pub async fn update_checklist_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((card_id, item_id)): Path<(DbId, DbId)>,
    Json(patch): Json<ChecklistItemPatch>,
) -> AppResult<impl IntoResponse> {
    let card = CardRepo::find_by_id(&state.pool, &card_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))?;

    let mut items = card.checklist_items.0.clone();
    checklist::patch_item(&mut items, &item_id, &patch)?;

    let updated = save_checklist(&state, &card.id, &items).await?;

    tracing::info!(card_id = %updated.id, item_id = %item_id, member_id = %auth.member_id, "Checklist item updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/cards/{id}/checklist/{item_id}
///
/// Remove one checklist item and return the updated card.
pub async fn remove_checklist_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((card_id, item_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let card = CardRepo::find_by_id(&state.pool, &card_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))?;

    let mut items = card.checklist_items.0.clone();
    checklist::remove_item(&mut items, &item_id)?;

    let updated = save_checklist(&state, &card.id, &items).await?;

    tracing::info!(card_id = %updated.id, item_id = %item_id, member_id = %auth.member_id, "Checklist item removed");

    Ok(Json(DataResponse { data: updated }))
}

/// Persist the rewritten checklist, mapping a concurrently-deleted card
/// to 404.
async fn save_checklist(
    state: &AppState,
    card_id: &str,
    items: &[tasklane_core::checklist::ChecklistItem],
) -> AppResult<Card> {
    CardRepo::save_checklist(&state.pool, card_id, items)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id.to_string(),
        }))
}
