use chrono::{DateTime, FixedOffset};
use std::fmt;
use thiserror::Error;

/// The base error type for the netcafe service.
///
/// Domain errors such as [`BookingError`] convert into it so handlers can
/// return one type that knows its HTTP status.
#[derive(Error, Debug)]
pub enum NetcafeError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict with existing state
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for NetcafeError {
    fn status_code(&self) -> u16 {
        match self {
            NetcafeError::ConfigError(_) => 500,
            NetcafeError::ValidationError(_) => 400,
            NetcafeError::DatabaseError(_) => 500,
            NetcafeError::ExternalServiceError { .. } => 502,
            NetcafeError::ConflictError(_) => 409,
            NetcafeError::InternalError(_) => 500,
        }
    }
}

/// Errors returned by booking stores and the validation layer in front of them.
///
/// A store only ever produces `Conflict` or `StorageUnavailable`;
/// `InvalidInput` is raised before a store is called.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("conflicting booking for computer {computer} ({start} - {end})")]
    Conflict {
        computer: i64,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },

    #[error("booking storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl BookingError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        BookingError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl HttpStatusCode for BookingError {
    fn status_code(&self) -> u16 {
        match self {
            BookingError::InvalidInput { .. } => 400,
            BookingError::Conflict { .. } => 409,
            BookingError::StorageUnavailable(_) => 500,
        }
    }
}

impl From<BookingError> for NetcafeError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::InvalidInput { .. } => NetcafeError::ValidationError(err.to_string()),
            BookingError::Conflict { .. } => NetcafeError::ConflictError(err.to_string()),
            BookingError::StorageUnavailable(_) => NetcafeError::DatabaseError(err.to_string()),
        }
    }
}

/// Failure of the best-effort calendar side channel. Logged, never returned to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MirrorError {
    #[error("calendar mirror failed: {0}")]
    ExternalMirrorFailure(String),
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, NetcafeError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, NetcafeError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, NetcafeError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| NetcafeError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, NetcafeError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| NetcafeError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> NetcafeError {
    NetcafeError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> NetcafeError {
    NetcafeError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> NetcafeError {
    NetcafeError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
