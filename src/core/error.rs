use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::core::response::relay_response;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every request-scoped error is terminal: the request fails with a bare
/// status code and an empty body, and the upstream call is never retried.
/// Detail stays in the logs; nothing about the failure is surfaced to the
/// client beyond the status.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed client request body
    #[error("invalid request body: {0}")]
    ClientInput(String),

    /// Gateway rejected the request (non-200 upstream status)
    #[error("gateway error: {0}")]
    Gateway(String),

    /// Transport-level failure talking to the gateway (includes timeout)
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Gateway returned a body that does not parse as a payment result
    #[error("gateway response decode error: {0}")]
    UpstreamDecode(String),

    /// JSON re-encoding of the merged request failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors (startup only, fatal)
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ClientInput(_) => tracing::debug!(error = %self, "rejecting request"),
            AppError::Serialization(_) => tracing::error!(error = %self, "request failed"),
            _ => tracing::warn!(error = %self, "request failed"),
        }

        // Empty body on every error path. Upstream failure detail is logged
        // only; the client sees the status code and nothing else.
        relay_response(self.status_code()).finish()
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ClientInput(_) => StatusCode::BAD_REQUEST,
            // Transport failure and upstream rejection collapse to the same
            // client-visible 500, matching the relay's original contract.
            AppError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamDecode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn client_input(msg: impl Into<String>) -> Self {
        AppError::ClientInput(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        AppError::Gateway(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
