//! Backend call handles — one gRPC client per backend, built once at
//! startup and shared read-only by every request.
//!
//! Channels connect lazily: an unreachable backend is not a startup error
//! (the transport dials and redials on demand), only an unparsable address
//! is. Clients are cheap clones over the shared channel, so concurrent
//! requests never contend on handle state.

use tonic::transport::{Channel, Endpoint};

use crate::config::Config;
use crate::error::SetupError;
use crate::proto::order::OrderServiceClient;
use crate::proto::user::UserServiceClient;

/// The gateway's shared state: the two backend handles plus the error
/// debug flag. Passed to every handler through axum's `State`; there are
/// no module-level client singletons.
#[derive(Clone, Debug)]
pub struct Gateway {
    pub users: UserServiceClient<Channel>,
    pub orders: OrderServiceClient<Channel>,
    pub debug_errors: bool,
}

impl Gateway {
    /// Build the call handles from configuration.
    pub fn connect(config: &Config) -> Result<Self, SetupError> {
        Ok(Self {
            users: UserServiceClient::new(channel("user", &config.user_service_url)?),
            orders: OrderServiceClient::new(channel("order", &config.order_service_url)?),
            debug_errors: config.debug_errors,
        })
    }
}

fn channel(service: &'static str, url: &str) -> Result<Channel, SetupError> {
    let endpoint = Endpoint::from_shared(url.to_string())
        .map_err(|source| SetupError::InvalidAddress { service, source })?;
    Ok(endpoint.connect_lazy())
}
