//! api-gateway — REST/JSON front for the user and order gRPC services.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use api_gateway::clients::Gateway;
use api_gateway::config::Config;
use api_gateway::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    // Call handles are built exactly once; a bad address is fatal before
    // the listener ever binds.
    let gateway = Gateway::connect(&config).context("failed to set up backend clients")?;

    tracing::info!("user service at {}", config.user_service_url);
    tracing::info!("order service at {}", config.order_service_url);

    server::serve(gateway, &format!("0.0.0.0:{}", config.port))
        .await
        .context("server error")?;

    Ok(())
}
