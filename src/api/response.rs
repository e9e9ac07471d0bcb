// API response utility functions module

use crate::logger;
use crate::roster::RosterError;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::convert::Infallible;

use super::types::ErrorResponse;

/// Build JSON response
#[allow(clippy::unnecessary_wraps)]
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let json = match serde_json::to_string_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Ok(Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"detail":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error")))));
        }
    };

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        }))
}

/// Error response with a `{"detail": ...}` body
pub fn error_response(
    status: StatusCode,
    detail: &str,
) -> Result<Response<Full<Bytes>>, Infallible> {
    json_response(
        status,
        &ErrorResponse {
            detail: detail.to_string(),
        },
    )
}

/// 404 Not Found response for unknown API routes
pub fn not_found() -> Result<Response<Full<Bytes>>, Infallible> {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

/// Map a roster error onto its HTTP status and detail body
pub fn roster_error_response(error: &RosterError) -> Result<Response<Full<Bytes>>, Infallible> {
    let status = match error {
        RosterError::UnknownActivity => StatusCode::NOT_FOUND,
        RosterError::AlreadySignedUp | RosterError::NotSignedUp => StatusCode::BAD_REQUEST,
    };
    error_response(status, &error.to_string())
}
