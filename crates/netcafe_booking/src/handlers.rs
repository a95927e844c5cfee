// File: crates/netcafe_booking/src/handlers.rs
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Json, Response},
};
use netcafe_common::{map_json_error, validation_error, Booking, BookingBackend, NetcafeError};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::mirror::MirrorDispatcher;
use crate::validation::BookingRequest;

// Shared state for the booking routes
#[derive(Clone)]
pub struct BookingState {
    pub store: Arc<dyn BookingBackend>,
    pub mirror: MirrorDispatcher,
}

impl BookingState {
    pub fn new(store: Arc<dyn BookingBackend>, mirror: MirrorDispatcher) -> Self {
        Self { store, mirror }
    }
}

/// Handler to create a booking.
///
/// The calendar mirror is notified only after the store has accepted the
/// booking, and its outcome never changes the response.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking accepted", body = Booking),
        (status = 400, description = "Malformed body or invalid field"),
        (status = 409, description = "Computer already booked for an overlapping interval"),
        (status = 500, description = "Storage unavailable")
    ),
    tag = "Bookings"
))]
pub async fn create_booking_handler(
    State(state): State<BookingState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), NetcafeError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected booking body: {}", rejection.body_text());
        validation_error(rejection.body_text())
    })?;

    let candidate = request.validate().map_err(|err| {
        warn!("Invalid booking request: {}", err);
        err
    })?;

    let booking = state.store.add_booking(candidate).await?;
    info!(
        "Booking {} created for computer {} by {}",
        booking.id, booking.computer, booking.name
    );

    state.mirror.notify(booking.clone());
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Handler to list all bookings in acceptance order.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings",
    responses(
        (status = 200, description = "All bookings, oldest first", body = [Booking]),
        (status = 500, description = "Storage unavailable")
    ),
    tag = "Bookings"
))]
pub async fn list_bookings_handler(
    State(state): State<BookingState>,
) -> Result<Json<Vec<Booking>>, Response> {
    let bookings = state.store.list_bookings().await;
    if let Ok(list) = &bookings {
        debug!("Listing {} bookings", list.len());
    }
    map_json_error(bookings, NetcafeError::from)
}
