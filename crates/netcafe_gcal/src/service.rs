// --- File: crates/netcafe_gcal/src/service.rs ---
//! Google Calendar implementation of [`CalendarMirror`].

use chrono::Utc;
use google_calendar3::api::{Event, EventDateTime};
use netcafe_common::{Booking, BoxFuture, CalendarMirror, MirrorError, MirrorReceipt};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::auth::HubType;

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
}

impl From<GcalServiceError> for MirrorError {
    fn from(err: GcalServiceError) -> Self {
        MirrorError::ExternalMirrorFailure(err.to_string())
    }
}

/// The calendar event for an accepted booking. Times are sent in UTC.
pub fn event_from_booking(booking: &Booking) -> Event {
    Event {
        summary: Some(format!("Booking for {}", booking.name)),
        description: Some(format!(
            "Computer {} booked by {} ({})",
            booking.computer, booking.name, booking.contact
        )),
        start: Some(EventDateTime {
            date_time: Some(booking.start_time.with_timezone(&Utc)),
            time_zone: Some("UTC".to_string()),
            ..Default::default()
        }),
        end: Some(EventDateTime {
            date_time: Some(booking.end_time.with_timezone(&Utc)),
            time_zone: Some("UTC".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Inserts one event per booking into a single calendar.
pub struct GoogleCalendarMirror {
    calendar_hub: Arc<HubType>,
    calendar_id: String,
}

impl GoogleCalendarMirror {
    pub fn new(calendar_hub: Arc<HubType>, calendar_id: impl Into<String>) -> Self {
        Self {
            calendar_hub,
            calendar_id: calendar_id.into(),
        }
    }

    async fn insert_event(&self, booking: &Booking) -> Result<MirrorReceipt, GcalServiceError> {
        let event = event_from_booking(booking);
        let (_response, created_event) = self
            .calendar_hub
            .events()
            .insert(event, &self.calendar_id)
            .doit()
            .await?;

        Ok(MirrorReceipt {
            event_id: created_event.id,
            status: created_event
                .status
                .unwrap_or_else(|| "confirmed".to_string()),
        })
    }
}

impl CalendarMirror for GoogleCalendarMirror {
    fn mirror_booking(&self, booking: Booking) -> BoxFuture<'_, MirrorReceipt, MirrorError> {
        Box::pin(async move {
            debug!(
                "Inserting calendar event for booking {} into {}",
                booking.id, self.calendar_id
            );
            self.insert_event(&booking).await.map_err(MirrorError::from)
        })
    }
}
