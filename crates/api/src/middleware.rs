//! Response-shaping middleware: the single boundary where failures become
//! the structured error body.
//!
//! Handlers (via [`crate::error::AppError`]) only pick a status code and a
//! message; this layer owns the wire shape, so no component below the
//! routing layer writes an HTTP body for failures. Responses produced by
//! other layers (panic recovery, timeouts, extractor rejections) get the
//! same shape with their body text as the message.

use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Maximum error body size we are willing to buffer when re-shaping a
/// response produced by another layer.
const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Human-readable failure message recorded by [`crate::error::AppError`].
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

/// Structured error body returned for every 4xx/5xx response.
///
/// The `status code` key (with a space) is part of the public contract.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub uri: String,
    pub message: String,
    #[serde(rename = "status code")]
    pub status_code: u16,
    /// RFC 2822 timestamp of when the failure was translated.
    pub timestamp: String,
    /// Canonical reason text for the status code.
    pub reason: String,
}

/// Rewrite every error response into the structured [`ErrorBody`] shape.
pub async fn shape_error_responses(req: Request, next: Next) -> Response {
    let uri = req.uri().path().to_string();
    let response = next.run(req).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let recorded = response
        .extensions()
        .get::<ErrorMessage>()
        .map(|e| e.0.clone());
    let message = match recorded {
        Some(message) => message,
        // A layer outside our error type produced this (panic recovery,
        // timeout, extractor rejection). Use its body text as the message.
        None => body_text(response, status).await,
    };

    let body = ErrorBody {
        uri,
        message,
        status_code: status.as_u16(),
        timestamp: chrono::Utc::now().to_rfc2822(),
        reason: status
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string(),
    };

    (status, Json(body)).into_response()
}

async fn body_text(response: Response<Body>, status: StatusCode) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), MAX_ERROR_BODY_BYTES)
        .await
        .unwrap_or_default();
    let text = String::from_utf8_lossy(&bytes).trim().to_string();
    if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        text
    }
}
