use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // Public, admin, and system subrouters live under /api/v1
    let api_v1 = Router::new()
        .nest("/catalog", crate::api::routes::catalog_routes::catalog_routes())
        .nest("/bookings", crate::api::routes::booking_routes::booking_routes())
        .nest("/inquiries", crate::api::routes::inquiry_routes::inquiry_routes())
        .nest("/settings", crate::api::routes::settings_routes::settings_routes())
        .nest("/admin", crate::api::routes::admin_routes::admin_routes())
        .nest("/system", crate::api::routes::system_routes::system_routes());

    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API v1
        .nest("/api/v1", api_v1)
        // Fallback handler for 404
        .fallback(handler_404)
        // CORS applies to all routes
        .layer(CorsLayer::very_permissive())
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "The requested resource was not found" })),
    )
}
