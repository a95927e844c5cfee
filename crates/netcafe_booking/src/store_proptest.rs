#[cfg(test)]
mod tests {
    use crate::store::MemoryBookingStore;
    use chrono::{DateTime, Duration, FixedOffset};
    use netcafe_common::{intervals_overlap, BookingError, NewBooking};
    use proptest::prelude::*;

    fn base() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-05-15T08:00:00Z").expect("valid base timestamp")
    }

    // (computer, start offset in minutes, duration in minutes)
    fn candidate_strategy() -> impl Strategy<Value = (i64, i64, i64)> {
        (1..4i64, 0..600i64, 1..180i64)
    }

    fn to_candidate((computer, start, duration): (i64, i64, i64)) -> NewBooking {
        let start_time = base() + Duration::minutes(start);
        NewBooking {
            name: "Guest".into(),
            contact: "guest@example.com".into(),
            computer,
            start_time,
            end_time: start_time + Duration::minutes(duration),
        }
    }

    proptest! {
        // No two stored bookings of one computer ever overlap, whatever order
        // candidates arrive in.
        #[test]
        fn test_stored_bookings_never_overlap(
            candidates in prop::collection::vec(candidate_strategy(), 1..40)
        ) {
            let store = MemoryBookingStore::new();
            for c in candidates {
                let _ = store.add_booking(to_candidate(c));
            }

            let bookings = store.list_bookings();
            for (i, a) in bookings.iter().enumerate() {
                for b in &bookings[i + 1..] {
                    prop_assert!(
                        a.computer != b.computer
                            || !intervals_overlap(a.start_time, a.end_time, b.start_time, b.end_time)
                    );
                }
            }
        }

        // Ids are 1..=n in list order and rejections leave no gaps.
        #[test]
        fn test_ids_are_dense_and_ordered(
            candidates in prop::collection::vec(candidate_strategy(), 1..40)
        ) {
            let store = MemoryBookingStore::new();
            let mut accepted = 0i64;
            for c in candidates {
                match store.add_booking(to_candidate(c)) {
                    Ok(booking) => {
                        accepted += 1;
                        prop_assert_eq!(booking.id, accepted);
                    }
                    Err(err) => {
                        let is_conflict = matches!(err, BookingError::Conflict { .. });
                        prop_assert!(is_conflict, "expected a conflict, got {:?}", err);
                    }
                }
            }

            let ids: Vec<i64> = store.list_bookings().iter().map(|b| b.id).collect();
            prop_assert_eq!(ids, (1..=accepted).collect::<Vec<_>>());
        }

        // A candidate is rejected exactly when something stored overlaps it.
        #[test]
        fn test_rejection_matches_overlap(
            existing in prop::collection::vec(candidate_strategy(), 0..20),
            incoming in candidate_strategy()
        ) {
            let store = MemoryBookingStore::new();
            for c in existing {
                let _ = store.add_booking(to_candidate(c));
            }
            let incoming = to_candidate(incoming);
            let expected_conflict = store.list_bookings().iter().any(|b| b.conflicts_with(&incoming));

            let result = store.add_booking(incoming);
            prop_assert_eq!(result.is_err(), expected_conflict);
        }
    }
}
