// --- File: crates/services/netcafe_backend/src/service_factory.rs ---
//! Builds the booking store and the calendar mirror from configuration.
//!
//! Both are created once at startup and handed to the router; nothing here
//! is global.
use netcafe_booking::{MemoryBookingStore, MirrorDispatcher};
use netcafe_common::{config_error, BookingBackend, NetcafeError};
use netcafe_config::{AppConfig, StorageBackend};
use std::sync::Arc;
use tracing::info;

#[cfg(feature = "database")]
use netcafe_db::{DbClient, SqlBookingRepository};

#[cfg(feature = "gcal")]
use {
    netcafe_common::external_service_error,
    netcafe_gcal::{create_calendar_hub, GoogleCalendarMirror},
};

/// The authoritative store selected by `storage.backend`.
pub async fn create_booking_store(
    config: &AppConfig,
) -> Result<Arc<dyn BookingBackend>, NetcafeError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory booking store");
            Ok(Arc::new(MemoryBookingStore::new()))
        }
        StorageBackend::Sql => create_sql_store(config).await,
    }
}

#[cfg(feature = "database")]
async fn create_sql_store(config: &AppConfig) -> Result<Arc<dyn BookingBackend>, NetcafeError> {
    let db_config = config
        .database
        .as_ref()
        .ok_or_else(|| config_error("storage.backend is sql but [database] is missing"))?;

    let db_client = DbClient::from_config(db_config)
        .await
        .map_err(|e| NetcafeError::DatabaseError(e.to_string()))?;
    let repository = SqlBookingRepository::new(db_client);
    repository
        .init_schema()
        .await
        .map_err(|e| NetcafeError::DatabaseError(e.to_string()))?;

    info!("Using SQL booking store");
    Ok(Arc::new(repository))
}

#[cfg(not(feature = "database"))]
async fn create_sql_store(_config: &AppConfig) -> Result<Arc<dyn BookingBackend>, NetcafeError> {
    Err(config_error(
        "storage.backend is sql but this binary was built without the database feature",
    ))
}

/// Starts the calendar mirror worker when `use_gcal` is set.
///
/// Authentication happens here, so a missing or rejected credential stops
/// startup instead of failing on the first booking.
pub async fn create_mirror_dispatcher(config: &AppConfig) -> Result<MirrorDispatcher, NetcafeError> {
    if !config.use_gcal {
        info!("Calendar mirror disabled");
        return Ok(MirrorDispatcher::disabled());
    }
    create_gcal_dispatcher(config).await
}

#[cfg(feature = "gcal")]
async fn create_gcal_dispatcher(config: &AppConfig) -> Result<MirrorDispatcher, NetcafeError> {
    let gcal_config = config
        .gcal
        .as_ref()
        .ok_or_else(|| config_error("use_gcal is set but [gcal] is missing"))?;

    let hub = create_calendar_hub(gcal_config)
        .await
        .map_err(|e| external_service_error("Google Calendar", e))?;
    let mirror = GoogleCalendarMirror::new(Arc::new(hub), gcal_config.calendar_id());

    // the worker runs until the last dispatcher clone is dropped
    let (dispatcher, _worker) = MirrorDispatcher::spawn(Arc::new(mirror));
    info!(
        "Calendar mirror enabled for calendar {}",
        gcal_config.calendar_id()
    );
    Ok(dispatcher)
}

#[cfg(not(feature = "gcal"))]
async fn create_gcal_dispatcher(_config: &AppConfig) -> Result<MirrorDispatcher, NetcafeError> {
    Err(config_error(
        "use_gcal is set but this binary was built without the gcal feature",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use netcafe_common::HttpStatusCode;

    #[tokio::test]
    async fn memory_store_is_the_default() {
        let store = create_booking_store(&AppConfig::default()).await.unwrap();
        assert!(store.list_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sql_store_without_database_section_is_a_config_error() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Sql;
        let err = match create_booking_store(&config).await {
            Ok(_) => panic!("expected a configuration error"),
            Err(err) => err,
        };
        assert!(matches!(err, NetcafeError::ConfigError(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[cfg(feature = "database")]
    #[tokio::test]
    async fn sql_store_uses_database_url() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Sql;
        config.database = Some(netcafe_config::DatabaseConfig {
            url: Some("sqlite::memory:".into()),
            ..Default::default()
        });
        let store = create_booking_store(&config).await.unwrap();
        assert!(store.list_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn mirror_disabled_unless_requested() {
        let dispatcher = create_mirror_dispatcher(&AppConfig::default()).await.unwrap();
        assert!(!dispatcher.is_enabled());
    }

    #[tokio::test]
    async fn requested_mirror_without_gcal_section_fails_startup() {
        let config = AppConfig {
            use_gcal: true,
            ..Default::default()
        };
        assert!(create_mirror_dispatcher(&config).await.is_err());
    }
}
