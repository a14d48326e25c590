//! Error taxonomy and status translation.
//!
//! Three request-scoped failure classes reach the client, always wrapped in
//! the uniform `{ "success": false, "error": ... }` envelope:
//!
//! - `Validation` — malformed client input, rejected before any backend
//!   call (400)
//! - `NotFound` — the backend reported the target entity absent (404)
//! - `Backend` — any other backend failure (500)
//!
//! Startup failures (`SetupError`) are fatal and never reach a client; the
//! process refuses to accept requests if one occurs.

use std::error::Error;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tonic::{Code, Status};

/// A backend failure as it came off the wire: native gRPC code plus
/// whatever detail text the backend attached. Produced at the invocation
/// boundary, consumed exactly once by [`BackendFailure::into_error`].
#[derive(Debug)]
pub struct BackendFailure {
    pub code: Code,
    pub detail: String,
}

impl From<Status> for BackendFailure {
    fn from(status: Status) -> Self {
        Self {
            code: status.code(),
            detail: status.message().to_string(),
        }
    }
}

impl fmt::Display for BackendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.detail)
    }
}

impl BackendFailure {
    /// Translate this failure for one endpoint.
    ///
    /// `NOT_FOUND` maps to 404 with the endpoint's fixed entity message.
    /// Everything else maps to 500, preferring the backend's detail text
    /// over `fallback` so the client never sees an empty error. With
    /// `debug` set, the 500 envelope also carries the native code.
    pub fn into_error(self, not_found: &str, fallback: &str, debug: bool) -> GatewayError {
        tracing::warn!(code = ?self.code, detail = %self.detail, "{fallback}");
        match self.code {
            Code::NotFound => GatewayError::NotFound(not_found.to_string()),
            code => GatewayError::Backend {
                message: if self.detail.is_empty() {
                    fallback.to_string()
                } else {
                    self.detail
                },
                detail: debug.then(|| format!("grpc {code:?}")),
            },
        }
    }
}

/// Error type for request handling, covering the full path from input
/// validation to backend translation.
#[derive(Debug)]
pub enum GatewayError {
    /// Client input was malformed or incomplete; no backend call was made.
    Validation(String),
    /// The backend reported the target entity absent.
    NotFound(String),
    /// Any other backend-reported failure.
    Backend {
        message: String,
        detail: Option<String>,
    },
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Validation(msg) => write!(f, "validation failed: {}", msg),
            GatewayError::NotFound(msg) => write!(f, "not found: {}", msg),
            GatewayError::Backend { message, .. } => write!(f, "backend failure: {}", message),
        }
    }
}

impl Error for GatewayError {}

impl GatewayError {
    /// Map this error to its HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Backend { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing error message.
    pub fn message(&self) -> &str {
        match self {
            GatewayError::Validation(msg) => msg,
            GatewayError::NotFound(msg) => msg,
            GatewayError::Backend { message, .. } => message,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let mut body = json!({ "success": false, "error": self.message() });
        if let GatewayError::Backend {
            detail: Some(detail),
            ..
        } = &self
        {
            body["detail"] = json!(detail);
        }
        (self.status_code(), Json(body)).into_response()
    }
}

/// Startup-time failure building the backend call handles. Fatal: the
/// process must not begin accepting requests.
#[derive(Debug)]
pub enum SetupError {
    /// The configured backend address could not be parsed into an endpoint.
    InvalidAddress {
        service: &'static str,
        source: tonic::transport::Error,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidAddress { service, source } => {
                write!(f, "invalid {} service address: {}", service, source)
            }
        }
    }
}

impl Error for SetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SetupError::InvalidAddress { source, .. } => Some(source),
        }
    }
}
