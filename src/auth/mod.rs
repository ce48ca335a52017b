//! Optional pre-shared-key authentication for the `/api` routes.
//!
//! Keys are compared in constant time.

use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::{AppError, AppErrorWithRevision};

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject requests that do not carry the configured key. No key configured means open access.
pub async fn require_api_key(expected_psk: Option<String>, request: Request, next: Next) -> Response {
    let Some(expected) = expected_psk else {
        return next.run(request).await;
    };

    let matched = provided_key(request.headers()).map(|key| keys_match(key, &expected));

    match matched {
        Some(true) => next.run(request).await,
        Some(false) => unauthorized("Invalid API key"),
        None => unauthorized("Missing API key"),
    }
}

/// The key from `x-api-key`, falling back to an `Authorization: Bearer` token.
fn provided_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        })
}

fn keys_match(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

fn unauthorized(message: &str) -> Response {
    AppErrorWithRevision {
        error: AppError::Unauthorized(message.to_string()),
        revision_id: 0,
    }
    .into_response()
}
