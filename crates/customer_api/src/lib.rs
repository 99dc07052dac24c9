//! HTTP surface for the customer service.
//!
//! # Endpoints
//!
//! - `GET /health` - liveness probe
//! - `GET|POST /api/v1/customers` - list, create
//! - `GET|PUT|DELETE /api/v1/customers/{id}` - fetch, update, delete

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::{customer_routes, health_routes, AppState, CUSTOMERS_PATH};
pub use server::{build_router, HttpServer};
