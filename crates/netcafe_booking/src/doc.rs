// File: crates/netcafe_booking/src/doc.rs

#![cfg(feature = "openapi")]
use netcafe_common::Booking;
use utoipa::OpenApi;

use crate::validation::BookingRequest;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::create_booking_handler,
        crate::handlers::list_bookings_handler
    ),
    components(schemas(Booking, BookingRequest)),
    tags(
        (name = "Bookings", description = "Computer booking API")
    )
)]
pub struct BookingApiDoc;
