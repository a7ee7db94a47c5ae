//! Liveness and version handlers

use axum::Json;
use serde::Serialize;

use crate::VERSION;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct VersionResponse {
    pub name: &'static str,
    pub version: &'static str,
}

/// GET /api/health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/version - API name and version string
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: "BudgetPilot Calculation API",
        version: VERSION,
    })
}
