//! `/api/users` — endpoints backed by the user service.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::clients::Gateway;
use crate::coerce::{self, Pagination};
use crate::error::GatewayError;
use crate::proto::user::{
    CreateUserRequest, DeleteUserRequest, GetUserRequest, ListUsersRequest, UpdateUserRequest,
    ValidateUserRequest,
};
use crate::rpc;

pub fn router() -> Router<Gateway> {
    Router::new()
        .route("/", axum::routing::post(create_user).get(list_users))
        .route(
            "/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/:id/validate", get(validate_user))
}

/// `POST /api/users` — create a user.
async fn create_user(
    State(gateway): State<Gateway>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, GatewayError> {
    let request = create_user_request(&body)?;
    let mut users = gateway.users.clone();
    let response = rpc::invoke(users.create_user(request))
        .await
        .map_err(|f| f.into_error("User not found", "Failed to create user", gateway.debug_errors))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": response.user,
            "message": response.message,
        })),
    ))
}

/// `GET /api/users/:id` — fetch one user.
async fn get_user(
    State(gateway): State<Gateway>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let id = coerce::parse_id(&id, "Invalid user ID")?;
    let mut users = gateway.users.clone();
    let response = rpc::invoke(users.get_user(GetUserRequest { id }))
        .await
        .map_err(|f| f.into_error("User not found", "Failed to get user", gateway.debug_errors))?;
    Ok(Json(json!({ "success": true, "data": response.user })))
}

/// `PUT /api/users/:id` — update a user. Absent fields are sent blank and
/// left unchanged by the backend.
async fn update_user(
    State(gateway): State<Gateway>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, GatewayError> {
    let id = coerce::parse_id(&id, "Invalid user ID")?;
    let request = UpdateUserRequest {
        id,
        name: coerce::string_or_blank(body.get("name")),
        email: coerce::string_or_blank(body.get("email")),
        phone: coerce::string_or_blank(body.get("phone")),
        address: coerce::string_or_blank(body.get("address")),
    };
    let mut users = gateway.users.clone();
    let response = rpc::invoke(users.update_user(request))
        .await
        .map_err(|f| f.into_error("User not found", "Failed to update user", gateway.debug_errors))?;
    Ok(Json(json!({
        "success": true,
        "data": response.user,
        "message": response.message,
    })))
}

/// `DELETE /api/users/:id` — delete a user. The envelope's success flag is
/// the backend's own, not fabricated.
async fn delete_user(
    State(gateway): State<Gateway>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let id = coerce::parse_id(&id, "Invalid user ID")?;
    let mut users = gateway.users.clone();
    let response = rpc::invoke(users.delete_user(DeleteUserRequest { id }))
        .await
        .map_err(|f| f.into_error("User not found", "Failed to delete user", gateway.debug_errors))?;
    Ok(Json(json!({
        "success": response.success,
        "message": response.message,
    })))
}

/// `GET /api/users?page&limit` — list users.
async fn list_users(
    State(gateway): State<Gateway>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, GatewayError> {
    let (page, limit) = (pagination.page(), pagination.limit());
    let mut users = gateway.users.clone();
    let response = rpc::invoke(users.list_users(ListUsersRequest { page, limit }))
        .await
        .map_err(|f| f.into_error("User not found", "Failed to list users", gateway.debug_errors))?;
    Ok(Json(json!({
        "success": true,
        "data": response.users,
        "pagination": { "page": page, "limit": limit, "total": response.total },
    })))
}

/// `GET /api/users/:id/validate` — check that a user exists.
async fn validate_user(
    State(gateway): State<Gateway>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let user_id = coerce::parse_id(&id, "Invalid user ID")?;
    let mut users = gateway.users.clone();
    let response = rpc::invoke(users.validate_user(ValidateUserRequest { user_id }))
        .await
        .map_err(|f| f.into_error("User not found", "Failed to validate user", gateway.debug_errors))?;
    Ok(Json(json!({
        "success": true,
        "is_valid": response.is_valid,
        "user": response.user,
    })))
}

/// `name` and `email` are required non-empty; `phone` and `address`
/// default to blank. Checked before anything is sent to the backend.
fn create_user_request(body: &Value) -> Result<CreateUserRequest, GatewayError> {
    match (
        coerce::non_empty(body.get("name")),
        coerce::non_empty(body.get("email")),
    ) {
        (Some(name), Some(email)) => Ok(CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: coerce::string_or_blank(body.get("phone")),
            address: coerce::string_or_blank(body.get("address")),
        }),
        _ => Err(GatewayError::Validation(
            "Name and email are required".to_string(),
        )),
    }
}
