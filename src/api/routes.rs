//! API Routes
//!
//! Configures the Axum router with all catalog endpoints and the
//! error-shaping middleware.

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum::http::StatusCode;
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use crate::error::{ApiError, ErrorMeta};

use super::handlers::{
    create_item_handler, get_item_handler, health_handler, list_items_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /items` - List items with filtering, sorting and pagination
/// - `POST /items` - Create a new item
/// - `GET /items/:id` - Retrieve a single item
/// - `GET /stats` - Aggregate statistics over the collection
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Error shaping: rewrites error bodies to `{error, status, path}`
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route("/items/:id", get(get_item_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .layer(middleware::from_fn(shape_error_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for unmatched routes.
async fn fallback_handler() -> ApiError {
    ApiError::NotFound("Route Not Found".to_string())
}

/// Rewrites error responses into the wire shape `{error, status, path}`.
///
/// Handlers attach an [`ErrorMeta`] extension when converting an
/// [`ApiError`]; this middleware is the one place that knows the request
/// path, so it logs the failure and rebuilds the body with the path
/// included. Non-error responses pass through untouched.
async fn shape_error_response(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    let Some(meta) = response.extensions().get::<ErrorMeta>().cloned() else {
        return response;
    };

    error!(status = meta.status, path = %path, "{}", meta.message);

    let status =
        StatusCode::from_u16(meta.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = Json(json!({
        "error": meta.message,
        "status": meta.status,
        "path": path,
    }));

    (status, body).into_response()
}
