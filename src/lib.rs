//! health-api: a liveness probe endpoint.
//!
//! Serves `GET /api/v1/health` with a static `{"health":"UP"}` body. The library
//! exposes the router and server so the binary and the integration tests build
//! the exact same service.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
