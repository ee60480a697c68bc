//! Router configuration for the API.
//!
//! Centralizes route registration, the OpenAPI document and middleware
//! ordering.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `/api/categories` - Category CRUD and listings
/// - `/api/products` - Product CRUD and listings
/// - `/api/health` - Health, readiness and liveness probes
/// - `/swagger-ui` - Interactive API documentation
///
/// # Middleware Order
/// Last added runs first: request ID, then logging, then CORS and compression.
pub fn create_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/categories", handlers::categories::category_routes())
        .nest("/api/products", handlers::products::product_routes())
        .nest("/api/health", handlers::health::health_routes())
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
