use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use swifta_booking::{Booking, BookingError, BookingStatus, Passenger};
use swifta_catalog::FareQuote;
use tracing::info;
use uuid::Uuid;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", post(create_booking).get(list_bookings))
        .route("/v1/bookings/{id}", get(get_booking))
        .route("/v1/bookings/{id}/cancel", post(cancel_booking))
}

#[derive(Debug, Deserialize)]
pub(crate) struct PassengerDetails {
    pub full_name: String,
    pub phone: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateBookingRequest {
    pub session_id: Uuid,
    pub contact: String,
    pub passengers: Vec<PassengerDetails>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateBookingResponse {
    pub booking_id: Uuid,
    pub reference: String,
    pub status: BookingStatus,
    pub seat_ids: Vec<String>,
    pub fare: FareQuote,
    pub loyalty_points_earned: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBookingsQuery {
    pub contact: String,
}

/// Finalize a selection session into a confirmed booking.
///
/// The session must have exactly its quota of seats chosen; the seat
/// selection itself is the source of truth for seats and subtotal, so
/// the client never supplies prices.
pub(crate) async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get(&req.session_id)
        .ok_or_else(|| AppError::NotFoundError(format!("Selection not found: {}", req.session_id)))?;

    let payload = session
        .selection
        .confirm()
        .map_err(AppError::from_selection)?;
    let journey_id = session.journey_id;

    let quote = state.fares.quote_subtotal(payload.total_price_naira);
    let passengers: Vec<Passenger> = req
        .passengers
        .iter()
        .map(|p| Passenger::new(&p.full_name, &p.phone))
        .collect();

    let mut bookings = state.bookings.write().await;
    let booking = bookings
        .create_booking(
            journey_id,
            req.contact.clone(),
            passengers,
            &payload,
            quote.total_naira,
        )
        .map_err(map_booking_error)?;
    let booking_id = booking.id;

    let confirmed = bookings
        .confirm_booking(&booking_id)
        .map_err(map_booking_error)?;
    let reference = confirmed.reference.clone();
    let status = confirmed.status;
    let seat_ids = confirmed.seat_ids.clone();

    let points = state
        .loyalty
        .write()
        .await
        .accrue(&req.contact, booking_id, quote.total_naira);

    // The session is spent once the booking exists
    sessions.remove(&req.session_id);

    info!(%booking_id, %reference, "booking created");
    Ok(Json(CreateBookingResponse {
        booking_id,
        reference,
        status,
        seat_ids,
        fare: quote,
        loyalty_points_earned: points,
    }))
}

pub(crate) async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let bookings = state.bookings.read().await;
    let booking = bookings
        .get_booking(&booking_id)
        .ok_or_else(|| AppError::NotFoundError(format!("Booking not found: {}", booking_id)))?;

    Ok(Json(booking.clone()))
}

pub(crate) async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.read().await;
    let found = bookings
        .list_by_contact(&query.contact)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(found))
}

pub(crate) async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let mut bookings = state.bookings.write().await;
    let booking = bookings
        .cancel_booking(&booking_id)
        .map_err(map_booking_error)?;

    Ok(Json(booking.clone()))
}

fn map_booking_error(err: BookingError) -> AppError {
    match err {
        BookingError::NotFound(_) => AppError::NotFoundError(err.to_string()),
        BookingError::InvalidTransition { .. } => AppError::ConflictError(err.to_string()),
        BookingError::PassengerMismatch { .. } => AppError::ValidationError(err.to_string()),
    }
}
