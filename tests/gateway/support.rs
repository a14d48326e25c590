//! Test support: in-memory fake backends and a running gateway.
//!
//! The fakes implement the generated service traits over real tonic
//! transports, and double as spies: they count calls and capture the
//! last request of interest, so tests can assert both what reached the
//! backend and that rejected requests never did.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Code, Request, Response, Status};

use api_gateway::proto::order::{
    CancelOrderRequest, CancelOrderResponse, CreateOrderRequest, CreateOrderResponse,
    GetOrderRequest, GetOrderResponse, GetUserOrdersRequest, GetUserOrdersResponse,
    ListOrdersRequest, ListOrdersResponse, Order, OrderService, OrderServiceServer, OrderStatus,
    UpdateOrderStatusRequest, UpdateOrderStatusResponse,
};
use api_gateway::proto::user::{
    CreateUserRequest, CreateUserResponse, DeleteUserRequest, DeleteUserResponse, GetUserRequest,
    GetUserResponse, ListUsersRequest, ListUsersResponse, UpdateUserRequest, UpdateUserResponse,
    User, UserService, UserServiceServer, ValidateUserRequest, ValidateUserResponse,
};
use api_gateway::{Config, Gateway};

const STAMP: &str = "2024-01-01 00:00:00";

/// Forced failure: every call on the fake returns this status.
#[derive(Clone)]
pub struct Fail(pub Code, pub &'static str);

#[derive(Default)]
pub struct FakeUserService {
    pub users: Mutex<HashMap<i32, User>>,
    pub calls: AtomicUsize,
    pub last_page: Mutex<Option<(i32, i32)>>,
    pub fail: Option<Fail>,
}

impl FakeUserService {
    pub fn failing(code: Code, detail: &'static str) -> Self {
        Self {
            fail: Some(Fail(code, detail)),
            ..Self::default()
        }
    }

    fn check_fail(&self) -> Result<(), Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail {
            Some(Fail(code, detail)) => Err(Status::new(*code, *detail)),
            None => Ok(()),
        }
    }
}

#[tonic::async_trait]
impl UserService for FakeUserService {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        self.check_fail()?;
        let req = request.into_inner();
        let mut users = self.users.lock().unwrap();
        let id = users.len() as i32 + 1;
        let user = User {
            id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            created_at: STAMP.to_string(),
            updated_at: STAMP.to_string(),
        };
        users.insert(id, user.clone());
        Ok(Response::new(CreateUserResponse {
            user: Some(user),
            message: "User created successfully".to_string(),
        }))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        self.check_fail()?;
        let id = request.into_inner().id;
        let users = self.users.lock().unwrap();
        match users.get(&id) {
            Some(user) => Ok(Response::new(GetUserResponse {
                user: Some(user.clone()),
            })),
            None => Err(Status::not_found("user not found")),
        }
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UpdateUserResponse>, Status> {
        self.check_fail()?;
        let req = request.into_inner();
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&req.id)
            .ok_or_else(|| Status::not_found("user not found"))?;
        // Blank fields leave the stored value unchanged.
        if !req.name.is_empty() {
            user.name = req.name;
        }
        if !req.email.is_empty() {
            user.email = req.email;
        }
        if !req.phone.is_empty() {
            user.phone = req.phone;
        }
        if !req.address.is_empty() {
            user.address = req.address;
        }
        Ok(Response::new(UpdateUserResponse {
            user: Some(user.clone()),
            message: "User updated successfully".to_string(),
        }))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        self.check_fail()?;
        let id = request.into_inner().id;
        let mut users = self.users.lock().unwrap();
        match users.remove(&id) {
            Some(_) => Ok(Response::new(DeleteUserResponse {
                message: "User deleted successfully".to_string(),
                success: true,
            })),
            None => Err(Status::not_found("user not found")),
        }
    }

    async fn list_users(
        &self,
        request: Request<ListUsersRequest>,
    ) -> Result<Response<ListUsersResponse>, Status> {
        self.check_fail()?;
        let req = request.into_inner();
        *self.last_page.lock().unwrap() = Some((req.page, req.limit));
        let users = self.users.lock().unwrap();
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        Ok(Response::new(ListUsersResponse {
            total: all.len() as i32,
            users: all,
        }))
    }

    async fn validate_user(
        &self,
        request: Request<ValidateUserRequest>,
    ) -> Result<Response<ValidateUserResponse>, Status> {
        self.check_fail()?;
        let user_id = request.into_inner().user_id;
        let users = self.users.lock().unwrap();
        match users.get(&user_id) {
            Some(user) => Ok(Response::new(ValidateUserResponse {
                is_valid: true,
                user: Some(user.clone()),
            })),
            None => Ok(Response::new(ValidateUserResponse {
                is_valid: false,
                user: None,
            })),
        }
    }
}

#[derive(Default)]
pub struct FakeOrderService {
    pub orders: Mutex<HashMap<i32, Order>>,
    pub calls: AtomicUsize,
    pub last_create: Mutex<Option<CreateOrderRequest>>,
    pub last_status: Mutex<Option<i32>>,
    pub last_page: Mutex<Option<(i32, i32)>>,
    pub fail: Option<Fail>,
}

impl FakeOrderService {
    pub fn failing(code: Code, detail: &'static str) -> Self {
        Self {
            fail: Some(Fail(code, detail)),
            ..Self::default()
        }
    }

    fn check_fail(&self) -> Result<(), Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail {
            Some(Fail(code, detail)) => Err(Status::new(*code, *detail)),
            None => Ok(()),
        }
    }
}

#[tonic::async_trait]
impl OrderService for FakeOrderService {
    async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<CreateOrderResponse>, Status> {
        self.check_fail()?;
        let req = request.into_inner();
        *self.last_create.lock().unwrap() = Some(req.clone());
        let mut orders = self.orders.lock().unwrap();
        let id = orders.len() as i32 + 1;
        let total_amount = req
            .items
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum();
        let mut items = req.items;
        for (i, item) in items.iter_mut().enumerate() {
            item.id = i as i32 + 1;
        }
        let order = Order {
            id,
            user_id: req.user_id,
            user_name: "Ada Lovelace".to_string(),
            user_email: "ada@example.com".to_string(),
            items,
            total_amount,
            status: OrderStatus::Pending as i32,
            created_at: STAMP.to_string(),
            updated_at: STAMP.to_string(),
        };
        orders.insert(id, order.clone());
        Ok(Response::new(CreateOrderResponse {
            order: Some(order),
            message: "Order created successfully".to_string(),
        }))
    }

    async fn get_order(
        &self,
        request: Request<GetOrderRequest>,
    ) -> Result<Response<GetOrderResponse>, Status> {
        self.check_fail()?;
        let id = request.into_inner().id;
        let orders = self.orders.lock().unwrap();
        match orders.get(&id) {
            Some(order) => Ok(Response::new(GetOrderResponse {
                order: Some(order.clone()),
            })),
            None => Err(Status::not_found("order not found")),
        }
    }

    async fn update_order_status(
        &self,
        request: Request<UpdateOrderStatusRequest>,
    ) -> Result<Response<UpdateOrderStatusResponse>, Status> {
        self.check_fail()?;
        let req = request.into_inner();
        *self.last_status.lock().unwrap() = Some(req.status);
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .get_mut(&req.id)
            .ok_or_else(|| Status::not_found("order not found"))?;
        order.status = req.status;
        Ok(Response::new(UpdateOrderStatusResponse {
            order: Some(order.clone()),
            message: "Order status updated successfully".to_string(),
        }))
    }

    async fn list_orders(
        &self,
        request: Request<ListOrdersRequest>,
    ) -> Result<Response<ListOrdersResponse>, Status> {
        self.check_fail()?;
        let req = request.into_inner();
        *self.last_page.lock().unwrap() = Some((req.page, req.limit));
        let orders = self.orders.lock().unwrap();
        let mut all: Vec<Order> = orders.values().cloned().collect();
        all.sort_by_key(|o| o.id);
        Ok(Response::new(ListOrdersResponse {
            total: all.len() as i32,
            orders: all,
        }))
    }

    async fn get_user_orders(
        &self,
        request: Request<GetUserOrdersRequest>,
    ) -> Result<Response<GetUserOrdersResponse>, Status> {
        self.check_fail()?;
        let user_id = request.into_inner().user_id;
        let orders = self.orders.lock().unwrap();
        let mut mine: Vec<Order> = orders
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by_key(|o| o.id);
        Ok(Response::new(GetUserOrdersResponse {
            total: mine.len() as i32,
            orders: mine,
        }))
    }

    async fn cancel_order(
        &self,
        request: Request<CancelOrderRequest>,
    ) -> Result<Response<CancelOrderResponse>, Status> {
        self.check_fail()?;
        let id = request.into_inner().id;
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .get_mut(&id)
            .ok_or_else(|| Status::not_found("order not found"))?;
        order.status = OrderStatus::Cancelled as i32;
        Ok(Response::new(CancelOrderResponse {
            message: "Order cancelled successfully".to_string(),
            success: true,
        }))
    }
}

/// A running gateway wired to the two fakes.
pub struct TestGateway {
    pub base: String,
    pub client: reqwest::Client,
    pub users: Arc<FakeUserService>,
    pub orders: Arc<FakeOrderService>,
}

/// Start with empty, well-behaved backends.
pub async fn start() -> TestGateway {
    start_with(FakeUserService::default(), FakeOrderService::default()).await
}

/// Bind everything to port 0, spawn the backends and the router, and
/// return a reqwest handle on the gateway.
pub async fn start_with(users: FakeUserService, orders: FakeOrderService) -> TestGateway {
    let users = Arc::new(users);
    let orders = Arc::new(orders);

    let user_addr = spawn_user_backend(users.clone()).await;
    let order_addr = spawn_order_backend(orders.clone()).await;

    let config = Config {
        port: 0,
        user_service_url: format!("http://{user_addr}"),
        order_service_url: format!("http://{order_addr}"),
        debug_errors: false,
    };
    let gateway = Gateway::connect(&config).unwrap();

    let app = api_gateway::server::router(gateway);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestGateway {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
        users,
        orders,
    }
}

async fn spawn_user_backend(service: Arc<FakeUserService>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(UserServiceServer::from_arc(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr
}

async fn spawn_order_backend(service: Arc<FakeOrderService>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(OrderServiceServer::from_arc(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr
}
