// --- File: crates/netcafe_common/src/services.rs ---
//! Service abstractions.
//!
//! The HTTP layer talks to storage and to the calendar only through these
//! traits, so stores and mirrors can be swapped at startup and doubled in tests.

use std::future::Future;
use std::pin::Pin;

use crate::error::{BookingError, MirrorError};
use crate::models::{Booking, NewBooking};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// The authoritative booking store.
///
/// Implementations must keep the no-overlap invariant per computer under
/// concurrent calls: the conflict scan and the insert happen atomically
/// with respect to other inserts. A rejected call leaves the store and its
/// id sequence unchanged.
pub trait BookingBackend: Send + Sync {
    /// Accepts the candidate and returns it with its assigned id, or
    /// `BookingError::Conflict` naming the interval it collides with.
    fn add_booking(&self, candidate: NewBooking) -> BoxFuture<'_, Booking, BookingError>;

    /// All accepted bookings in acceptance order. The returned vector is
    /// an owned copy.
    fn list_bookings(&self) -> BoxFuture<'_, Vec<Booking>, BookingError>;
}

/// Result of mirroring a booking into an external calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorReceipt {
    pub event_id: Option<String>,
    pub status: String,
}

/// Best-effort copy of accepted bookings into an external calendar.
pub trait CalendarMirror: Send + Sync {
    fn mirror_booking(&self, booking: Booking) -> BoxFuture<'_, MirrorReceipt, MirrorError>;
}
