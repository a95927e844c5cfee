//! Database integration for netcafe
//!
//! A relational [`BookingBackend`](netcafe_common::BookingBackend) on top of
//! SQLx's `Any` driver. SQLite is compiled in by default; PostgreSQL and
//! MySQL drivers are available through feature flags.
//!
//! # Example
//!
//! ```rust,no_run
//! use netcafe_db::{DbClient, SqlBookingRepository};
//!
//! async fn setup_store() -> Result<SqlBookingRepository, Box<dyn std::error::Error>> {
//!     let db_client = DbClient::from_url("sqlite://data/bookings.db").await?;
//!     let repository = SqlBookingRepository::new(db_client);
//!     repository.init_schema().await?;
//!     Ok(repository)
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;

pub use client::DbClient;
pub use error::DbError;
pub use repositories::SqlBookingRepository;
