// --- File: crates/netcafe_common/src/models.rs ---

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Strict half-open overlap test: `[a_start, a_end)` and `[b_start, b_end)`
/// share at least one instant. Touching intervals do not overlap.
pub fn intervals_overlap(
    a_start: DateTime<FixedOffset>,
    a_end: DateTime<FixedOffset>,
    b_start: DateTime<FixedOffset>,
    b_end: DateTime<FixedOffset>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// An accepted reservation of one computer for `[start_time, end_time)`.
///
/// Immutable once the store has assigned its `id`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "alice@example.com"))]
    pub contact: String,
    /// The bookable computer.
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub computer: i64,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = DateTime, example = "2025-05-15T10:00:00Z")
    )]
    pub start_time: DateTime<FixedOffset>,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = DateTime, example = "2025-05-15T11:00:00Z")
    )]
    pub end_time: DateTime<FixedOffset>,
}

impl Booking {
    /// Attaches a store-assigned id to a validated candidate.
    pub fn from_candidate(id: i64, candidate: NewBooking) -> Self {
        Self {
            id,
            name: candidate.name,
            contact: candidate.contact,
            computer: candidate.computer,
            start_time: candidate.start_time,
            end_time: candidate.end_time,
        }
    }

    /// Same computer and overlapping interval.
    pub fn conflicts_with(&self, candidate: &NewBooking) -> bool {
        self.computer == candidate.computer
            && intervals_overlap(
                self.start_time,
                self.end_time,
                candidate.start_time,
                candidate.end_time,
            )
    }
}

/// A booking candidate that passed request validation.
///
/// Guarantees: `computer > 0`, `name` and `contact` non-empty,
/// `start_time < end_time`. Stores rely on these without rechecking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub contact: String,
    pub computer: i64,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hh_mm: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&format!("2025-05-15T{hh_mm}:00Z")).unwrap()
    }

    fn candidate(computer: i64, start: &str, end: &str) -> NewBooking {
        NewBooking {
            name: "Alice".into(),
            contact: "alice@example.com".into(),
            computer,
            start_time: at(start),
            end_time: at(end),
        }
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        assert!(!intervals_overlap(at("10:00"), at("11:00"), at("11:00"), at("12:00")));
        assert!(!intervals_overlap(at("11:00"), at("12:00"), at("10:00"), at("11:00")));
    }

    #[test]
    fn partial_and_nested_intervals_overlap() {
        assert!(intervals_overlap(at("10:00"), at("11:00"), at("10:30"), at("11:30")));
        assert!(intervals_overlap(at("10:00"), at("12:00"), at("10:30"), at("11:00")));
        assert!(intervals_overlap(at("10:30"), at("11:00"), at("10:00"), at("12:00")));
        assert!(intervals_overlap(at("10:00"), at("11:00"), at("10:00"), at("11:00")));
    }

    #[test]
    fn overlap_compares_instants_across_offsets() {
        let start = DateTime::parse_from_rfc3339("2025-05-15T12:30:00+02:00").unwrap();
        let end = DateTime::parse_from_rfc3339("2025-05-15T13:30:00+02:00").unwrap();
        // 10:30Z..11:30Z against 10:00Z..11:00Z
        assert!(intervals_overlap(start, end, at("10:00"), at("11:00")));
    }

    #[test]
    fn conflicts_only_on_same_computer() {
        let existing = Booking::from_candidate(1, candidate(1, "10:00", "11:00"));
        assert!(existing.conflicts_with(&candidate(1, "10:30", "11:30")));
        assert!(!existing.conflicts_with(&candidate(2, "10:30", "11:30")));
        assert!(!existing.conflicts_with(&candidate(1, "11:00", "12:00")));
    }
}
