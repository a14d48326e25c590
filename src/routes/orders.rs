//! `/api/orders` — endpoints backed by the order service.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::clients::Gateway;
use crate::coerce::{self, Pagination};
use crate::error::GatewayError;
use crate::proto::order::{
    CancelOrderRequest, CreateOrderRequest, GetOrderRequest, GetUserOrdersRequest,
    ListOrdersRequest, OrderItem, OrderStatus, UpdateOrderStatusRequest,
};
use crate::rpc;

const STATUS_NAMES: &str = "PENDING, PROCESSING, SHIPPED, DELIVERED, CANCELLED";

pub fn router() -> Router<Gateway> {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id", get(get_order))
        .route("/:id/status", patch(update_order_status))
        .route("/:id/cancel", post(cancel_order))
        .route("/user/:user_id", get(user_orders))
}

/// `POST /api/orders` — create an order. The backend validates the user
/// and reports `NOT_FOUND` if they do not exist.
async fn create_order(
    State(gateway): State<Gateway>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, GatewayError> {
    let request = create_order_request(&body)?;
    let mut orders = gateway.orders.clone();
    let response = rpc::invoke(orders.create_order(request))
        .await
        .map_err(|f| f.into_error("User not found", "Failed to create order", gateway.debug_errors))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": response.order,
            "message": response.message,
        })),
    ))
}

/// `GET /api/orders/:id` — fetch one order.
async fn get_order(
    State(gateway): State<Gateway>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let id = coerce::parse_id(&id, "Invalid order ID")?;
    let mut orders = gateway.orders.clone();
    let response = rpc::invoke(orders.get_order(GetOrderRequest { id }))
        .await
        .map_err(|f| f.into_error("Order not found", "Failed to get order", gateway.debug_errors))?;
    Ok(Json(json!({ "success": true, "data": response.order })))
}

/// `PATCH /api/orders/:id/status` — move an order through its lifecycle.
async fn update_order_status(
    State(gateway): State<Gateway>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, GatewayError> {
    let id = coerce::parse_id(&id, "Invalid order ID")?;
    let status = status_code(body.get("status"))?;
    let mut orders = gateway.orders.clone();
    let response = rpc::invoke(orders.update_order_status(UpdateOrderStatusRequest { id, status }))
        .await
        .map_err(|f| {
            f.into_error("Order not found", "Failed to update order status", gateway.debug_errors)
        })?;
    Ok(Json(json!({
        "success": true,
        "data": response.order,
        "message": response.message,
    })))
}

/// `GET /api/orders?page&limit` — list orders.
async fn list_orders(
    State(gateway): State<Gateway>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, GatewayError> {
    let (page, limit) = (pagination.page(), pagination.limit());
    let mut orders = gateway.orders.clone();
    let response = rpc::invoke(orders.list_orders(ListOrdersRequest { page, limit }))
        .await
        .map_err(|f| f.into_error("Order not found", "Failed to list orders", gateway.debug_errors))?;
    Ok(Json(json!({
        "success": true,
        "data": response.orders,
        "pagination": { "page": page, "limit": limit, "total": response.total },
    })))
}

/// `GET /api/orders/user/:userId` — all orders belonging to one user.
async fn user_orders(
    State(gateway): State<Gateway>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let user_id = coerce::parse_id(&user_id, "Invalid user ID")?;
    let mut orders = gateway.orders.clone();
    let response = rpc::invoke(orders.get_user_orders(GetUserOrdersRequest { user_id }))
        .await
        .map_err(|f| {
            f.into_error("User not found", "Failed to get user orders", gateway.debug_errors)
        })?;
    Ok(Json(json!({
        "success": true,
        "data": response.orders,
        "total": response.total,
    })))
}

/// `POST /api/orders/:id/cancel` — cancel an order. The envelope's success
/// flag is the backend's own.
async fn cancel_order(
    State(gateway): State<Gateway>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let id = coerce::parse_id(&id, "Invalid order ID")?;
    let mut orders = gateway.orders.clone();
    let response = rpc::invoke(orders.cancel_order(CancelOrderRequest { id }))
        .await
        .map_err(|f| f.into_error("Order not found", "Failed to cancel order", gateway.debug_errors))?;
    Ok(Json(json!({
        "success": response.success,
        "message": response.message,
    })))
}

/// `user_id` and a non-empty `items` array are required. Every item must
/// carry `product_name`, `quantity`, and `price`; one bad item rejects the
/// whole request. Presence is judged on the raw value, then quantities
/// coerce to integers and prices to floats.
fn create_order_request(body: &Value) -> Result<CreateOrderRequest, GatewayError> {
    let user_id = coerce::int(body.get("user_id")).filter(|id| *id != 0);
    let items = body.get("items").and_then(Value::as_array);
    let (user_id, items) = match (user_id, items) {
        (Some(user_id), Some(items)) if !items.is_empty() => (user_id, items),
        _ => {
            return Err(GatewayError::Validation(
                "user_id and items array are required".to_string(),
            ))
        }
    };

    let mut normalized = Vec::with_capacity(items.len());
    for item in items {
        let product_name = coerce::non_empty(item.get("product_name"));
        let quantity = coerce::int(item.get("quantity")).filter(|q| *q != 0);
        let price = coerce::float(item.get("price")).filter(|p| *p != 0.0);
        match (product_name, quantity, price) {
            (Some(product_name), Some(quantity), Some(price)) => normalized.push(OrderItem {
                id: 0,
                product_name: product_name.to_string(),
                quantity,
                price,
            }),
            _ => {
                return Err(GatewayError::Validation(
                    "Each item must have product_name, quantity, and price".to_string(),
                ))
            }
        }
    }

    Ok(CreateOrderRequest {
        user_id,
        items: normalized,
    })
}

/// The status field accepts a symbolic name (case-insensitive) or a numeric
/// code. Numeric codes are forwarded without range-checking against the
/// declared enumeration.
fn status_code(value: Option<&Value>) -> Result<i32, GatewayError> {
    let value = match value {
        None | Some(Value::Null) => {
            return Err(GatewayError::Validation("Status is required".to_string()))
        }
        Some(value) => value,
    };
    if let Value::String(name) = value {
        return OrderStatus::from_str_name(&name.to_uppercase())
            .map(|status| status as i32)
            .ok_or_else(invalid_status);
    }
    coerce::int(Some(value)).ok_or_else(invalid_status)
}

fn invalid_status() -> GatewayError {
    GatewayError::Validation(format!("Invalid status. Must be one of: {STATUS_NAMES}"))
}
