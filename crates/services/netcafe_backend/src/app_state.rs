// --- File: crates/services/netcafe_backend/src/app_state.rs ---
use netcafe_booking::{BookingState, MemoryBookingStore, MirrorDispatcher};
use netcafe_common::{BookingBackend, NetcafeError};
use netcafe_config::AppConfig;
use std::sync::Arc;

use crate::service_factory::{create_booking_store, create_mirror_dispatcher};

/// Everything the HTTP layer needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn BookingBackend>,
    pub mirror: MirrorDispatcher,
}

/// Builder for AppState. Unset parts fall back to an in-memory store and a
/// disabled mirror, which is what tests usually want.
pub struct AppStateBuilder {
    config: Arc<AppConfig>,
    store: Option<Arc<dyn BookingBackend>>,
    mirror: Option<MirrorDispatcher>,
}

impl AppStateBuilder {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            store: None,
            mirror: None,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn BookingBackend>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_mirror(mut self, mirror: MirrorDispatcher) -> Self {
        self.mirror = Some(mirror);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            config: self.config,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryBookingStore::new())),
            mirror: self.mirror.unwrap_or_default(),
        }
    }
}

impl AppState {
    pub fn builder(config: Arc<AppConfig>) -> AppStateBuilder {
        AppStateBuilder::new(config)
    }

    /// Builds the configured store and mirror.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, NetcafeError> {
        let store = create_booking_store(&config).await?;
        let mirror = create_mirror_dispatcher(&config).await?;
        Ok(Self::builder(config)
            .with_store(store)
            .with_mirror(mirror)
            .build())
    }

    pub fn booking_state(&self) -> BookingState {
        BookingState::new(self.store.clone(), self.mirror.clone())
    }
}
