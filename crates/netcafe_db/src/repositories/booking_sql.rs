//! SQL implementation of the booking store
//!
//! Timestamps are stored as RFC 3339 text with the client's offset and
//! compared in Rust, so the overlap rule is the one the in-memory store uses
//! regardless of the engine's date handling.

use crate::error::DbError;
use crate::DbClient;
use chrono::{DateTime, FixedOffset};
use netcafe_common::{Booking, BookingBackend, BookingError, BoxFuture, NewBooking};
use sqlx::any::AnyRow;
use sqlx::Row;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// SQL implementation of [`BookingBackend`].
///
/// Inserts are serialized by an in-process writer lock held across the
/// whole check-then-insert transaction. The lock only covers this process;
/// several processes writing to one database are not coordinated.
#[derive(Debug)]
pub struct SqlBookingRepository {
    db_client: DbClient,
    writer: Mutex<()>,
}

impl SqlBookingRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self {
            db_client,
            writer: Mutex::new(()),
        }
    }

    /// Creates the `bookings` table if it doesn't exist.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing booking schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS bookings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                contact TEXT NOT NULL,
                computer INTEGER NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL
            )
        "#;
        self.db_client.execute(query).await?;
        self.db_client
            .execute("CREATE INDEX IF NOT EXISTS idx_bookings_computer ON bookings (computer)")
            .await?;

        info!("Booking schema initialized successfully");
        Ok(())
    }

    /// Inserts `candidate` unless a stored booking of the same computer overlaps it.
    pub async fn insert_booking(&self, candidate: NewBooking) -> Result<Booking, BookingError> {
        let _writer = self.writer.lock().await;
        let mut tx = self.db_client.begin().await?;

        let rows = sqlx::query(
            r#"
            SELECT id, name, contact, computer, start_time, end_time
            FROM bookings
            WHERE computer = $1
            "#,
        )
        .bind(candidate.computer)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!("Failed to read bookings for computer {}: {}", candidate.computer, e);
            DbError::QueryError(e.to_string())
        })?;

        for row in &rows {
            let existing = booking_from_row(row)?;
            if existing.conflicts_with(&candidate) {
                // dropping tx rolls back
                info!("Rejected booking: overlaps booking {}", existing.id);
                return Err(BookingError::Conflict {
                    computer: existing.computer,
                    start: existing.start_time,
                    end: existing.end_time,
                });
            }
        }

        let row = sqlx::query(
            r#"
            INSERT INTO bookings (name, contact, computer, start_time, end_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(candidate.name.as_str())
        .bind(candidate.contact.as_str())
        .bind(candidate.computer)
        .bind(candidate.start_time.to_rfc3339())
        .bind(candidate.end_time.to_rfc3339())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("Failed to insert booking: {}", e);
            DbError::QueryError(e.to_string())
        })?;
        let id: i64 = row.try_get("id").map_err(DbError::from)?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        debug!("Booking {} stored for computer {}", id, candidate.computer);
        Ok(Booking::from_candidate(id, candidate))
    }

    /// All bookings ordered by id, which is acceptance order.
    pub async fn find_all(&self) -> Result<Vec<Booking>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, contact, computer, start_time, end_time
            FROM bookings
            ORDER BY id
            "#,
        )
        .fetch_all(self.db_client.pool())
        .await
        .map_err(|e| {
            error!("Failed to list bookings: {}", e);
            DbError::QueryError(e.to_string())
        })?;

        rows.iter().map(booking_from_row).collect()
    }
}

fn booking_from_row(row: &AnyRow) -> Result<Booking, DbError> {
    Ok(Booking {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        contact: row.try_get("contact")?,
        computer: row.try_get("computer")?,
        start_time: parse_timestamp(&row.try_get::<String, _>("start_time")?)?,
        end_time: parse_timestamp(&row.try_get::<String, _>("end_time")?)?,
    })
}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, DbError> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|e| DbError::DecodeError(format!("invalid timestamp {:?}: {}", value, e)))
}

impl BookingBackend for SqlBookingRepository {
    fn add_booking(&self, candidate: NewBooking) -> BoxFuture<'_, Booking, BookingError> {
        Box::pin(self.insert_booking(candidate))
    }

    fn list_bookings(&self) -> BoxFuture<'_, Vec<Booking>, BookingError> {
        Box::pin(async move { Ok(self.find_all().await?) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_keep_their_offset() {
        let parsed = parse_timestamp("2025-05-15T12:00:00+02:00").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 7200);
        assert_eq!(parsed.to_rfc3339(), "2025-05-15T12:00:00+02:00");
    }

    #[test]
    fn garbage_timestamp_is_a_decode_error() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(DbError::DecodeError(_))
        ));
    }
}
