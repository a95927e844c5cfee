// --- File: crates/netcafe_common/src/lib.rs ---

pub mod error; // Error taxonomy and HTTP status mapping
pub mod http; // Error to response conversion
pub mod logging; // Tracing subscriber setup
pub mod models; // Booking data structures
pub mod services; // Store and calendar abstractions

pub use error::{
    config_error, external_service_error, validation_error, BookingError, Context,
    HttpStatusCode, MirrorError, NetcafeError,
};

pub use http::{map_json_error, IntoHttpResponse};

pub use logging::{init, init_with_level, level_from_config, log_error, log_result};

pub use models::{intervals_overlap, Booking, NewBooking};

pub use services::{BookingBackend, BoxFuture, CalendarMirror, MirrorReceipt};
