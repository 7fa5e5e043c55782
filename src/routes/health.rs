//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that answers 200 OK with `{"health":"UP"}` whenever
//! the process can serve HTTP. It consults no request data and no shared state,
//! so every response is byte-identical.

use axum::Json;
use serde::Serialize;

/// The only status this endpoint ever reports.
pub const HEALTH_UP: &str = "UP";

/// Health payload, built fresh for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub health: &'static str,
}

impl HealthStatus {
    pub const fn up() -> Self {
        Self { health: HEALTH_UP }
    }
}

/// GET /api/v1/health
pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus::up())
}
