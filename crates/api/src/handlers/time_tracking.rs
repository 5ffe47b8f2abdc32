//! Handlers for card time tracking: action recording, history, the
//! live summary, and the total reset.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasklane_core::error::CoreError;
use tasklane_core::timelog::TrackAction;
use tasklane_core::types::DbId;
use tasklane_db::models::card::{Card, RecordTimeAction, TimeSummary};
use tasklane_db::repositories::{CardRepo, TimeEntryRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/cards/{id}/time-entries
///
/// Record a tracking action. `start`/`resume` open the card's session;
/// `pause`/`stop` close it and fold the elapsed seconds into the card's
/// total. Opening an already-open session, or closing an idle one, is
/// a 400.
pub async fn record_time_action(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
    Json(input): Json<RecordTimeAction>,
) -> AppResult<impl IntoResponse> {
    let action = TrackAction::parse(&input.action)?;
    let card = find_card(&state, card_id).await?;

    let entry = if action.opens_session() {
        if card.is_tracking {
            return Err(AppError::Core(CoreError::Validation(
                "Card already has an open tracking session".into(),
            )));
        }
        TimeEntryRepo::open_session(
            &state.pool,
            &card,
            &auth.member_id,
            action,
            input.note.as_deref(),
        )
        .await?
    } else {
        if !card.is_tracking {
            return Err(AppError::Core(CoreError::Validation(
                "Card has no open tracking session".into(),
            )));
        }
        TimeEntryRepo::close_session(
            &state.pool,
            &card,
            &auth.member_id,
            action,
            input.note.as_deref(),
        )
        .await?
    };

    tracing::info!(
        card_id = %entry.card_id,
        action = %entry.action,
        member_id = %auth.member_id,
        "Time entry recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /api/v1/cards/{id}/time-entries
///
/// Action history for a card, most recent first.
pub async fn list_time_entries(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let card = find_card(&state, card_id).await?;
    let entries = TimeEntryRepo::history(&state.pool, &card.id).await?;

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/cards/{id}/time-summary
///
/// The card's tracking state with its history: accumulated total, open
/// session (and how long it has been running), and the action rows.
pub async fn time_summary(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let card = find_card(&state, card_id).await?;

    let current_session_secs = if card.is_tracking {
        TimeEntryRepo::current_session_secs(&state.pool, &card.id).await?
    } else {
        0
    };
    let entries = TimeEntryRepo::history(&state.pool, &card.id).await?;

    let summary = TimeSummary {
        card_id: card.id,
        total_time_spent: card.total_time_spent,
        is_tracking: card.is_tracking,
        tracking_started_at: card.tracking_started_at,
        current_session_secs,
        entries,
    };

    Ok(Json(DataResponse { data: summary }))
}

/// POST /api/v1/cards/{id}/time-reset
///
/// Zero the card's accumulated total and close any open session. The
/// history rows are kept. Returns the updated card.
pub async fn reset_time(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let card = find_card(&state, card_id).await?;

    let updated = TimeEntryRepo::reset(&state.pool, &card)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card.id,
        }))?;

    tracing::info!(card_id = %updated.id, member_id = %auth.member_id, "Card time tracking reset");

    Ok(Json(DataResponse { data: updated }))
}

async fn find_card(state: &AppState, card_id: DbId) -> AppResult<Card> {
    CardRepo::find_by_id(&state.pool, &card_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))
}
