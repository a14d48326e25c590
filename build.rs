fn main() {
    // The backend schema is fixed and externally owned, so the service
    // bindings are compiled ahead of time from hand-tagged prost messages
    // (no .proto files to parse at runtime).
    let user_service = tonic_build::manual::Service::builder()
        .name("UserService")
        .package("user")
        .method(
            tonic_build::manual::Method::builder()
                .name("create_user")
                .route_name("CreateUser")
                .input_type("crate::proto::user::CreateUserRequest")
                .output_type("crate::proto::user::CreateUserResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("get_user")
                .route_name("GetUser")
                .input_type("crate::proto::user::GetUserRequest")
                .output_type("crate::proto::user::GetUserResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("update_user")
                .route_name("UpdateUser")
                .input_type("crate::proto::user::UpdateUserRequest")
                .output_type("crate::proto::user::UpdateUserResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("delete_user")
                .route_name("DeleteUser")
                .input_type("crate::proto::user::DeleteUserRequest")
                .output_type("crate::proto::user::DeleteUserResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("list_users")
                .route_name("ListUsers")
                .input_type("crate::proto::user::ListUsersRequest")
                .output_type("crate::proto::user::ListUsersResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("validate_user")
                .route_name("ValidateUser")
                .input_type("crate::proto::user::ValidateUserRequest")
                .output_type("crate::proto::user::ValidateUserResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    let order_service = tonic_build::manual::Service::builder()
        .name("OrderService")
        .package("order")
        .method(
            tonic_build::manual::Method::builder()
                .name("create_order")
                .route_name("CreateOrder")
                .input_type("crate::proto::order::CreateOrderRequest")
                .output_type("crate::proto::order::CreateOrderResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("get_order")
                .route_name("GetOrder")
                .input_type("crate::proto::order::GetOrderRequest")
                .output_type("crate::proto::order::GetOrderResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("update_order_status")
                .route_name("UpdateOrderStatus")
                .input_type("crate::proto::order::UpdateOrderStatusRequest")
                .output_type("crate::proto::order::UpdateOrderStatusResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("list_orders")
                .route_name("ListOrders")
                .input_type("crate::proto::order::ListOrdersRequest")
                .output_type("crate::proto::order::ListOrdersResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("get_user_orders")
                .route_name("GetUserOrders")
                .input_type("crate::proto::order::GetUserOrdersRequest")
                .output_type("crate::proto::order::GetUserOrdersResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("cancel_order")
                .route_name("CancelOrder")
                .input_type("crate::proto::order::CancelOrderRequest")
                .output_type("crate::proto::order::CancelOrderResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    tonic_build::manual::Builder::new().compile(&[user_service, order_service]);
}
