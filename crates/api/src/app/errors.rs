use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use billable_core::DomainError;

/// Map a failure from the invoice-number routes onto an HTTP error.
///
/// Codes are specific to those routes: `Validation` only comes from prefix
/// parsing and `InvariantViolation` only from the exhausted sequence.
pub fn number_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_prefix", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::SERVICE_UNAVAILABLE, "sequence_exhausted", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
