// --- File: crates/netcafe_booking/src/store.rs ---
//! In-memory booking store.
//!
//! One mutex guards both the booking list and the id counter. `add_booking`
//! holds it across scan, counter increment and append, so two concurrent
//! candidates can never both pass the overlap check against a state that
//! does not contain the other. Nothing awaits or logs while the lock is held.

use netcafe_common::{Booking, BookingBackend, BookingError, BoxFuture, NewBooking};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

#[derive(Debug, Default)]
struct StoreInner {
    /// Acceptance order.
    bookings: Vec<Booking>,
    /// Last assigned id. Only incremented on acceptance.
    counter: i64,
}

#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    inner: Mutex<StoreInner>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a complete scan+push under the guard, so a panic
    // elsewhere cannot leave a half-applied booking behind.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Accepts `candidate` unless it overlaps an existing booking of the
    /// same computer. Scans every stored booking.
    pub fn add_booking(&self, candidate: NewBooking) -> Result<Booking, BookingError> {
        let result = {
            let mut inner = self.lock();
            match inner.bookings.iter().find(|b| b.conflicts_with(&candidate)) {
                Some(existing) => Err(BookingError::Conflict {
                    computer: existing.computer,
                    start: existing.start_time,
                    end: existing.end_time,
                }),
                None => {
                    inner.counter += 1;
                    let booking = Booking::from_candidate(inner.counter, candidate);
                    inner.bookings.push(booking.clone());
                    Ok(booking)
                }
            }
        };

        match &result {
            Ok(booking) => debug!(
                "Accepted booking {} for computer {}",
                booking.id, booking.computer
            ),
            Err(err) => info!("Rejected booking: {}", err),
        }
        result
    }

    /// Owned copy of all bookings in acceptance order.
    pub fn list_bookings(&self) -> Vec<Booking> {
        self.lock().bookings.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BookingBackend for MemoryBookingStore {
    fn add_booking(&self, candidate: NewBooking) -> BoxFuture<'_, Booking, BookingError> {
        Box::pin(std::future::ready(MemoryBookingStore::add_booking(
            self, candidate,
        )))
    }

    fn list_bookings(&self) -> BoxFuture<'_, Vec<Booking>, BookingError> {
        Box::pin(std::future::ready(Ok(MemoryBookingStore::list_bookings(
            self,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn at(hh_mm: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&format!("2025-05-15T{hh_mm}:00Z")).unwrap()
    }

    fn candidate(computer: i64, start: &str, end: &str) -> NewBooking {
        NewBooking {
            name: "Alice".into(),
            contact: "+41 79 000 00 00".into(),
            computer,
            start_time: at(start),
            end_time: at(end),
        }
    }

    #[test]
    fn test_booking_scenario() {
        let store = MemoryBookingStore::new();

        let first = store.add_booking(candidate(1, "10:00", "11:00")).unwrap();
        assert_eq!(first.id, 1);

        let err = store
            .add_booking(candidate(1, "10:30", "11:30"))
            .unwrap_err();
        assert_eq!(
            err,
            BookingError::Conflict {
                computer: 1,
                start: at("10:00"),
                end: at("11:00"),
            }
        );

        // touching boundary
        let second = store.add_booking(candidate(1, "11:00", "12:00")).unwrap();
        assert_eq!(second.id, 2);

        // other computer, same interval as the first
        let third = store.add_booking(candidate(2, "10:00", "11:00")).unwrap();
        assert_eq!(third.id, 3);

        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_rejection_does_not_consume_an_id() {
        let store = MemoryBookingStore::new();
        store.add_booking(candidate(7, "09:00", "10:00")).unwrap();
        for _ in 0..5 {
            store.add_booking(candidate(7, "09:30", "09:45")).unwrap_err();
        }
        let next = store.add_booking(candidate(7, "10:00", "10:30")).unwrap();
        assert_eq!(next.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_returned_booking_carries_candidate_fields() {
        let store = MemoryBookingStore::new();
        let c = candidate(4, "13:00", "15:00");
        let booking = store.add_booking(c.clone()).unwrap();
        assert_eq!(booking.name, c.name);
        assert_eq!(booking.contact, c.contact);
        assert_eq!(booking.computer, 4);
        assert_eq!(booking.start_time, c.start_time);
        assert_eq!(booking.end_time, c.end_time);
    }

    #[test]
    fn test_list_empty_store() {
        let store = MemoryBookingStore::new();
        assert!(store.list_bookings().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_preserves_acceptance_order() {
        let store = MemoryBookingStore::new();
        store.add_booking(candidate(3, "15:00", "16:00")).unwrap();
        store.add_booking(candidate(1, "08:00", "09:00")).unwrap();
        store.add_booking(candidate(2, "12:00", "13:00")).unwrap();

        let ids: Vec<i64> = store.list_bookings().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let computers: Vec<i64> = store.list_bookings().iter().map(|b| b.computer).collect();
        assert_eq!(computers, vec![3, 1, 2]);
    }

    #[test]
    fn test_list_returns_a_detached_copy() {
        let store = MemoryBookingStore::new();
        store.add_booking(candidate(1, "10:00", "11:00")).unwrap();

        let mut snapshot = store.list_bookings();
        snapshot[0].name = "Mallory".into();
        snapshot.clear();

        store.add_booking(candidate(1, "11:00", "12:00")).unwrap();

        let current = store.list_bookings();
        assert_eq!(current.len(), 2);
        assert_eq!(current[0].name, "Alice");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_concurrent_overlapping_candidates_accept_exactly_one() {
        const THREADS: usize = 16;
        let store = Arc::new(MemoryBookingStore::new());
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let store = store.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    // all windows contain 10:30
                    let start = format!("10:{:02}", i);
                    barrier.wait();
                    store.add_booking(candidate(9, &start, "11:00"))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let accepted: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(BookingError::Conflict { computer: 9, .. })))
            .count();

        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].id, 1);
        assert_eq!(conflicts, THREADS - 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_disjoint_candidates_get_unique_increasing_ids() {
        const THREADS: i64 = 12;
        let store = Arc::new(MemoryBookingStore::new());

        let handles: Vec<_> = (1..=THREADS)
            .map(|computer| {
                let store = store.clone();
                thread::spawn(move || store.add_booking(candidate(computer, "10:00", "11:00")))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let ids: Vec<i64> = store.list_bookings().iter().map(|b| b.id).collect();
        assert_eq!(ids, (1..=THREADS).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_backend_trait_delegates_to_store() {
        let store: Arc<dyn BookingBackend> = Arc::new(MemoryBookingStore::new());
        let booking = store
            .add_booking(candidate(1, "10:00", "11:00"))
            .await
            .unwrap();
        assert_eq!(booking.id, 1);
        assert!(store
            .add_booking(candidate(1, "10:59", "11:30"))
            .await
            .is_err());
        assert_eq!(store.list_bookings().await.unwrap(), vec![booking]);
    }
}
