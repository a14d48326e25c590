//! Protocol translation gateway: a REST/JSON surface over independent gRPC
//! backends.
//!
//! Each inbound HTTP request is normalized (field presence, type coercion,
//! enum name mapping), forwarded as exactly one gRPC invocation against the
//! owning backend, and the outcome (payload or native failure code) is
//! translated back into an HTTP status plus a uniform success/error
//! envelope. Structurally invalid requests are rejected with 400 before
//! any backend call is made.

pub mod clients;
pub mod coerce;
pub mod config;
pub mod error;
pub mod proto;
pub mod routes;
pub mod rpc;
pub mod server;

pub use clients::Gateway;
pub use config::Config;
pub use error::{BackendFailure, GatewayError, SetupError};
