//! Order service schema (`order` package).

use serde::Serializer;

// ---------------------------------------------------------------------------
// Message types (prost — standard protobuf wire format)
// ---------------------------------------------------------------------------

/// Order lifecycle states and their wire codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, prost::Enumeration)]
#[repr(i32)]
pub enum OrderStatus {
    Pending = 0,
    Processing = 1,
    Shipped = 2,
    Delivered = 3,
    Cancelled = 4,
}

impl OrderStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(OrderStatus::Pending),
            "PROCESSING" => Some(OrderStatus::Processing),
            "SHIPPED" => Some(OrderStatus::Shipped),
            "DELIVERED" => Some(OrderStatus::Delivered),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct OrderItem {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub product_name: String,
    #[prost(int32, tag = "3")]
    pub quantity: i32,
    #[prost(double, tag = "4")]
    pub price: f64,
}

/// An order as the backend reports it, denormalized with the owning user's
/// name and email.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Order {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(int32, tag = "2")]
    pub user_id: i32,
    #[prost(string, tag = "3")]
    pub user_name: String,
    #[prost(string, tag = "4")]
    pub user_email: String,
    #[prost(message, repeated, tag = "5")]
    pub items: Vec<OrderItem>,
    #[prost(double, tag = "6")]
    pub total_amount: f64,
    #[prost(enumeration = "OrderStatus", tag = "7")]
    #[serde(serialize_with = "status_name")]
    pub status: i32,
    #[prost(string, tag = "8")]
    pub created_at: String,
    #[prost(string, tag = "9")]
    pub updated_at: String,
}

/// Envelopes carry the status as its symbolic name. Inbound numeric codes
/// are not range-checked, so a code outside the declared enumeration falls
/// back to the raw number.
fn status_name<S: Serializer>(code: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    match OrderStatus::try_from(*code) {
        Ok(status) => serializer.serialize_str(status.as_str_name()),
        Err(_) => serializer.serialize_i32(*code),
    }
}

/// Item ids are assigned by the backend; requests carry them as zero.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateOrderRequest {
    #[prost(int32, tag = "1")]
    pub user_id: i32,
    #[prost(message, repeated, tag = "2")]
    pub items: Vec<OrderItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateOrderResponse {
    #[prost(message, optional, tag = "1")]
    pub order: Option<Order>,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetOrderRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetOrderResponse {
    #[prost(message, optional, tag = "1")]
    pub order: Option<Order>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateOrderStatusRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(enumeration = "OrderStatus", tag = "2")]
    pub status: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateOrderStatusResponse {
    #[prost(message, optional, tag = "1")]
    pub order: Option<Order>,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListOrdersRequest {
    #[prost(int32, tag = "1")]
    pub page: i32,
    #[prost(int32, tag = "2")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListOrdersResponse {
    #[prost(message, repeated, tag = "1")]
    pub orders: Vec<Order>,
    #[prost(int32, tag = "2")]
    pub total: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetUserOrdersRequest {
    #[prost(int32, tag = "1")]
    pub user_id: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetUserOrdersResponse {
    #[prost(message, repeated, tag = "1")]
    pub orders: Vec<Order>,
    #[prost(int32, tag = "2")]
    pub total: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CancelOrderRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CancelOrderResponse {
    #[prost(string, tag = "1")]
    pub message: String,
    #[prost(bool, tag = "2")]
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Generated service trait + server/client
// ---------------------------------------------------------------------------

include!(concat!(env!("OUT_DIR"), "/order.OrderService.rs"));

pub use order_service_client::OrderServiceClient;
pub use order_service_server::{OrderService, OrderServiceServer};
