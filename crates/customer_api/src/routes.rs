//! Customer HTTP routes.
//!
//! # Responsibility
//! - Map the `api/v1/customers` route table onto `CustomerService` calls.
//! - Decode request bodies into `NewCustomerRequest`; malformed JSON and
//!   non-integer ids are rejected by the extractors before handler code runs.
//!
//! # Invariants
//! - Service calls run on Tokio's blocking pool; the connection lock is held
//!   for one call and never across an `.await`.
//! - Write endpoints answer 200 with an empty body.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use customer_core::{
    core_version, ping, Customer, CustomerId, CustomerService, NewCustomerRequest, RepoResult,
    SqliteCustomerRepository,
};
use log::debug;
use rusqlite::Connection;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

/// Base path of the customer resource.
pub const CUSTOMERS_PATH: &str = "/api/v1/customers";

/// State shared by all handlers: the single store connection.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    async fn with_customer_service<T, F>(&self, f: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&CustomerService<SqliteCustomerRepository<'_>>) -> RepoResult<T>
            + Send
            + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|_| ApiError::StoreUnavailable)?;
            let service = CustomerService::new(SqliteCustomerRepository::new(&conn));
            f(&service).map_err(ApiError::from)
        })
        .await
        .map_err(|_| ApiError::StoreUnavailable)?
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Builds the customer route table.
pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route(
            CUSTOMERS_PATH,
            get(list_customers_handler).post(add_customer_handler),
        )
        .route(
            &format!("{CUSTOMERS_PATH}/:customer_id"),
            get(get_customer_handler)
                .put(update_customer_details_handler)
                .delete(delete_customer_by_id_handler),
        )
        .with_state(state)
}

/// Liveness probe; does not touch the store.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> Json<HealthResponse> {
    debug!("event=health module=api status=ok probe={}", ping());
    Json(HealthResponse {
        status: "ok",
        version: core_version(),
    })
}

async fn list_customers_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Customer>>> {
    let customers = state
        .with_customer_service(|service| service.list_customers())
        .await?;
    debug!(
        "event=customer_list module=api status=ok count={}",
        customers.len()
    );
    Ok(Json(customers))
}

async fn get_customer_handler(
    State(state): State<AppState>,
    Path(customer_id): Path<CustomerId>,
) -> ApiResult<Json<Customer>> {
    let customer = state
        .with_customer_service(move |service| service.get_customer(customer_id))
        .await?;
    Ok(Json(customer))
}

async fn add_customer_handler(
    State(state): State<AppState>,
    Json(request): Json<NewCustomerRequest>,
) -> ApiResult<()> {
    state
        .with_customer_service(move |service| service.add_customer(&request))
        .await?;
    Ok(())
}

async fn update_customer_details_handler(
    State(state): State<AppState>,
    Path(customer_id): Path<CustomerId>,
    Json(request): Json<NewCustomerRequest>,
) -> ApiResult<()> {
    state
        .with_customer_service(move |service| {
            service.update_customer_details(customer_id, &request)
        })
        .await?;
    Ok(())
}

async fn delete_customer_by_id_handler(
    State(state): State<AppState>,
    Path(customer_id): Path<CustomerId>,
) -> ApiResult<()> {
    state
        .with_customer_service(move |service| service.delete_customer_by_id(customer_id))
        .await?;
    Ok(())
}
