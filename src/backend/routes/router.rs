/**
 * Router Configuration
 *
 * Combines the health check, the `/api` routes and the fallback into one
 * router, then wraps it with CORS and request tracing.
 *
 * # Route Order
 *
 * 1. `GET /` health check
 * 2. API routes under `/api`
 * 3. Fallback returning 404 `{"message": "Route not found"}`, also used when
 *    a known path is called with the wrong method
 */

use axum::{http::StatusCode, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::requests::MessageResponse;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(health));

    let router = configure_api_routes(router);

    router
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

/// `GET /`
async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new("Kanban API is running"))
}

async fn route_not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Route not found")
}
