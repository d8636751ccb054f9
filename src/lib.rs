use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::database::Repository;

pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod utils;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
}

impl AppState {
    pub fn new<R>(repo: R) -> Self
    where
        R: Repository + 'static,
    {
        Self {
            repo: Arc::new(repo),
        }
    }
}

/// Builds the full HTTP application: API routes under `api_base_uri`, the root
/// greeting, logging middleware and CORS.
pub fn app(state: AppState, api_base_uri: &str) -> Router {
    let api = routes::api_routes();
    // axum refuses to nest at the root, so an empty prefix merges instead.
    let router = if api_base_uri.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(api_base_uri, api)
    };

    router
        .route("/", get(routes::root))
        .layer(axum::middleware::from_fn(middleware::log_errors))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        // TODO: restrict origins to the deployed frontend before going to production.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
