use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use swifta_core::{RandomOccupancy, SeatSelection, SeatStatus, SelectionPayload, ToggleOutcome};
use tracing::info;
use uuid::Uuid;

/// One user's in-progress seat selection for one journey.
///
/// Held only in memory; navigating away (dropping the session) is the
/// cancellation path and needs no cleanup.
pub struct SelectionSession {
    pub id: Uuid,
    pub journey_id: Uuid,
    pub selection: SeatSelection,
    pub created_at: DateTime<Utc>,
}

pub type SessionStore = HashMap<Uuid, SelectionSession>;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/selections", post(open_selection))
        .route("/v1/selections/{id}", get(get_selection))
        .route("/v1/selections/{id}/toggle", post(toggle_seat))
        .route("/v1/selections/{id}/confirm", post(confirm_selection))
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenSelectionRequest {
    pub journey_id: Uuid,
    pub passenger_count: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct SeatView {
    pub id: String,
    pub status: SeatStatus,
    pub price_naira: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct SelectionView {
    pub session_id: Uuid,
    pub journey_id: Uuid,
    pub passenger_quota: u32,
    pub seats: Vec<SeatView>,
    pub selected_seat_ids: Vec<String>,
    pub total_naira: i64,
    pub seats_remaining: u32,
}

impl SelectionView {
    fn from_session(session: &SelectionSession) -> Self {
        let selection = &session.selection;
        Self {
            session_id: session.id,
            journey_id: session.journey_id,
            passenger_quota: selection.passenger_quota(),
            seats: selection
                .seat_map()
                .iter_ordered()
                .map(|seat| SeatView {
                    id: seat.id.clone(),
                    status: seat.status,
                    price_naira: seat.price_naira,
                })
                .collect(),
            selected_seat_ids: selection.selected_seat_ids().to_vec(),
            total_naira: selection.compute_total(),
            seats_remaining: selection.seats_remaining(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToggleSeatRequest {
    pub seat_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ToggleSeatResponse {
    pub outcome: ToggleOutcome,
    pub selected_seat_ids: Vec<String>,
    pub total_naira: i64,
    pub seats_remaining: u32,
}

pub(crate) async fn open_selection(
    State(state): State<AppState>,
    Json(req): Json<OpenSelectionRequest>,
) -> Result<Json<SelectionView>, AppError> {
    // The engine trusts its inputs; journey existence is checked here,
    // in the upstream collaborator.
    let journey = state
        .journeys
        .get(req.journey_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Journey not found: {}", req.journey_id)))?;

    let mut oracle = RandomOccupancy::new(state.rules.occupancy_rate);
    let selection = SeatSelection::initialize(
        journey.layout,
        req.passenger_count,
        journey.fare_naira,
        &mut oracle,
    )
    .map_err(AppError::from_selection)?;

    let session = SelectionSession {
        id: Uuid::new_v4(),
        journey_id: journey.id,
        selection,
        created_at: Utc::now(),
    };
    let view = SelectionView::from_session(&session);

    state.sessions.write().await.insert(session.id, session);
    info!(session_id = %view.session_id, journey_id = %view.journey_id, "selection session opened");

    Ok(Json(view))
}

pub(crate) async fn get_selection(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SelectionView>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFoundError(format!("Selection not found: {}", session_id)))?;

    Ok(Json(SelectionView::from_session(session)))
}

pub(crate) async fn toggle_seat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<ToggleSeatRequest>,
) -> Result<Json<ToggleSeatResponse>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| AppError::NotFoundError(format!("Selection not found: {}", session_id)))?;

    let outcome = session
        .selection
        .toggle_seat(&req.seat_id)
        .map_err(AppError::from_selection)?;

    let selection = &session.selection;
    Ok(Json(ToggleSeatResponse {
        outcome,
        selected_seat_ids: selection.selected_seat_ids().to_vec(),
        total_naira: selection.compute_total(),
        seats_remaining: selection.seats_remaining(),
    }))
}

pub(crate) async fn confirm_selection(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SelectionPayload>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFoundError(format!("Selection not found: {}", session_id)))?;

    let payload = session
        .selection
        .confirm()
        .map_err(AppError::from_selection)?;

    Ok(Json(payload))
}
