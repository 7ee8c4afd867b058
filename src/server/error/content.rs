use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while reading from the content-management system.
#[derive(Error, Debug)]
pub enum ContentError {
    /// No usable content-management URL is configured.
    ///
    /// Raised per request rather than at startup so a missing or malformed
    /// `DIRECTUS_URL` never prevents the process from booting.
    #[error("Content endpoint is not configured: {0}")]
    NotConfigured(String),

    /// Outbound request exceeded the configured timeout.
    #[error("Content request to collection '{collection}' timed out")]
    Timeout { collection: String },

    /// Transport-level failure (connection refused, TLS, etc).
    #[error("Content request to collection '{collection}' failed: {source}")]
    Request {
        collection: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status.
    #[error("Content endpoint returned {status} for collection '{collection}': {message}")]
    Status {
        collection: String,
        status: u16,
        message: String,
    },

    /// Upstream body could not be decoded into the expected shape.
    #[error("Failed to decode items of collection '{collection}': {source}")]
    Decode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    /// Classifies a reqwest error, separating timeouts from other transport failures.
    pub fn from_reqwest(collection: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                collection: collection.to_string(),
            }
        } else {
            Self::Request {
                collection: collection.to_string(),
                source,
            }
        }
    }
}

/// Converts content errors into HTTP responses.
///
/// Every variant maps to 500 Internal Server Error. The upstream detail is logged at
/// error level while the client only receives a generic message so collection names,
/// credentials problems or upstream messages never leak to guests.
impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Failed to load hotel content".to_string(),
            }),
        )
            .into_response()
    }
}
