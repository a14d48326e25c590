//! HTTP shell — router assembly and serving.
//!
//! Plain web-server scaffolding: route table, health and index endpoints,
//! CORS, request tracing, 404 fallback. Everything interesting happens in
//! the route modules.

use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::clients::Gateway;
use crate::routes;

/// Build the full router over a connected gateway.
pub fn router(gateway: Gateway) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/api/users", routes::users::router())
        .nest("/api/orders", routes::orders::router())
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}

/// Bind and serve at the given address, until ctrl-c.
pub async fn serve(gateway: Gateway, addr: &str) -> Result<(), std::io::Error> {
    let app = router(gateway);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("gateway listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received, closing HTTP server");
    }
}

/// `GET /health`
async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "api-gateway",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// `GET /` — service catalog for humans poking at the gateway.
async fn index() -> impl IntoResponse {
    Json(json!({
        "service": "API Gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "REST API Gateway for gRPC Microservices",
        "endpoints": {
            "users": {
                "POST /api/users": "Create a new user",
                "GET /api/users": "List all users (supports ?page=1&limit=10)",
                "GET /api/users/:id": "Get user by ID",
                "PUT /api/users/:id": "Update user",
                "DELETE /api/users/:id": "Delete user",
                "GET /api/users/:id/validate": "Validate user exists",
            },
            "orders": {
                "POST /api/orders": "Create a new order",
                "GET /api/orders": "List all orders (supports ?page=1&limit=10)",
                "GET /api/orders/:id": "Get order by ID",
                "PATCH /api/orders/:id/status": "Update order status",
                "GET /api/orders/user/:userId": "Get orders for specific user",
                "POST /api/orders/:id/cancel": "Cancel an order",
            },
        },
    }))
}

async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": format!("Cannot {} {}", method, uri.path()),
        })),
    )
}
