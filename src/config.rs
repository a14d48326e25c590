//! Environment-driven configuration, loaded once at startup.

use std::env;

/// Gateway configuration. Built from the environment once and passed
/// explicitly to everything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port.
    pub port: u16,
    /// User service endpoint.
    pub user_service_url: String,
    /// Order service endpoint.
    pub order_service_url: String,
    /// Include gRPC failure codes in 500 envelopes. Off by default; client
    /// responses never carry internal diagnostics unless this is set.
    pub debug_errors: bool,
}

impl Config {
    /// Load from the environment, with the development defaults.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            user_service_url: service_url("USER_SERVICE_URL", "localhost:50051"),
            order_service_url: service_url("ORDER_SERVICE_URL", "localhost:50052"),
            debug_errors: env::var("GATEWAY_DEBUG_ERRORS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

fn service_url(var: &str, default: &str) -> String {
    with_scheme(env::var(var).unwrap_or_else(|_| default.to_string()))
}

/// Backend addresses are conventionally given bare (`localhost:50051`);
/// tonic endpoints require a scheme.
fn with_scheme(raw: String) -> String {
    if raw.contains("://") {
        raw
    } else {
        format!("http://{raw}")
    }
}
