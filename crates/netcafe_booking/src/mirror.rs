// --- File: crates/netcafe_booking/src/mirror.rs ---
//! Hands accepted bookings to a [`CalendarMirror`] off the request path.
//!
//! The handler only enqueues; a single worker task drains the queue and
//! calls the mirror once per booking. Failures are logged and dropped.

use netcafe_common::{log_error, Booking, CalendarMirror};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Clone, Debug, Default)]
pub struct MirrorDispatcher {
    sender: Option<mpsc::UnboundedSender<Booking>>,
}

impl MirrorDispatcher {
    /// A dispatcher that silently drops every booking.
    pub fn disabled() -> Self {
        Self { sender: None }
    }

    /// Starts the worker on the current tokio runtime.
    ///
    /// The worker exits once every clone of the returned dispatcher is dropped
    /// and the queue is drained.
    pub fn spawn(mirror: Arc<dyn CalendarMirror>) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_worker(mirror, receiver));
        (
            Self {
                sender: Some(sender),
            },
            handle,
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    /// Queues `booking` for mirroring. Never blocks.
    pub fn notify(&self, booking: Booking) {
        let Some(sender) = &self.sender else {
            return;
        };
        let id = booking.id;
        if sender.send(booking).is_err() {
            warn!("Calendar mirror worker is gone; booking {} not mirrored", id);
        }
    }
}

async fn run_worker(mirror: Arc<dyn CalendarMirror>, mut receiver: mpsc::UnboundedReceiver<Booking>) {
    while let Some(booking) = receiver.recv().await {
        let id = booking.id;
        match mirror.mirror_booking(booking).await {
            Ok(receipt) => info!(
                "Booking {} mirrored to calendar (event: {:?}, status: {})",
                id, receipt.event_id, receipt.status
            ),
            Err(err) => log_error(err, &format!("Failed to mirror booking {}", id)),
        }
    }
    info!("Calendar mirror worker stopped");
}
