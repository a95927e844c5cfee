// --- File: crates/netcafe_booking/src/routes.rs ---

use crate::handlers::{create_booking_handler, list_bookings_handler, BookingState};
use axum::{routing::get, Router};

/// Creates a router containing all booking routes.
///
/// `/api/bookings` serves the same handlers as `/bookings` for clients of
/// the older API layout.
pub fn routes(state: BookingState) -> Router {
    Router::new()
        .route(
            "/bookings",
            get(list_bookings_handler).post(create_booking_handler),
        )
        .route(
            "/api/bookings",
            get(list_bookings_handler).post(create_booking_handler),
        )
        .with_state(state)
}
