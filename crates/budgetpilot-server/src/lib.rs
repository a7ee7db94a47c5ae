//! BudgetPilot Web Server
//!
//! Axum-based REST API around the budgetpilot-core calculation engine.
//! The engine is pure and synchronous; this crate only handles transport:
//! routing, CORS, status-code mapping, and sanitized error responses.
//!
//! Status-code contract:
//! - value-validation failures from the engine (`InvalidInput`) → 400
//! - any other failure → 500 with a generic message (detail is logged,
//!   never sent to the client)

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

mod handlers;


/// Version string exposed by the /api/version endpoint
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins; empty means permissive (any origin), which
    /// suits local single-user use. List origins explicitly when the
    /// server fronts a hosted UI.
    pub allowed_origins: Vec<String>,
}

/// Create the application router
pub fn create_router(config: ServerConfig) -> Router {
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    };

    let api_routes = Router::new()
        .route("/calculate", post(handlers::calculate_budget))
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the server
pub async fn serve(host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
