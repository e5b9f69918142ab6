use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod controllers;
pub mod db;
pub mod models;
pub mod routers;

use db::Catalog;
use routers::{health_check_route, root_route, sarkilar_route};

/// Routes and middleware for the catalog service, with the loaded catalog as state.
pub fn build_router(catalog: Catalog) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Core routes
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        // Song catalog
        .route("/sarkilar", get(sarkilar_route))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}
