// --- File: crates/netcafe_booking/src/lib.rs ---
pub mod doc;
pub mod handlers;
pub mod mirror;
pub mod routes;
pub mod store;
#[cfg(test)]
mod store_proptest;
pub mod validation;

pub use handlers::BookingState;
pub use mirror::MirrorDispatcher;
pub use routes::routes;
pub use store::MemoryBookingStore;
pub use validation::BookingRequest;
