// --- File: crates/netcafe_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{BookingError, HttpStatusCode, NetcafeError};

/// Extension trait for NetcafeError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for NetcafeError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error_message = self.to_string();

        let body = Json(json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for NetcafeError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        NetcafeError::from(self).into_http_response()
    }
}

/// Converts a `Result<T, E>` into a JSON response, mapping the error through `f`.
pub fn map_json_error<T, E, F>(result: Result<T, E>, f: F) -> Result<Json<T>, Response>
where
    T: serde::Serialize,
    F: FnOnce(E) -> NetcafeError,
{
    result.map(Json).map_err(|err| f(err).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn error_body_carries_message_and_code() {
        let response = NetcafeError::ConflictError("computer 2 taken".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], 409);
        assert_eq!(body["error"]["message"], "Conflict: computer 2 taken");
    }

    #[test]
    fn booking_error_responds_with_its_status() {
        let response = BookingError::invalid("computer", "must be a positive integer").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn map_json_error_uses_mapper() {
        let result: Result<Vec<i64>, BookingError> =
            Err(BookingError::StorageUnavailable("closed".into()));
        let response = map_json_error(result, NetcafeError::from).unwrap_err();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
