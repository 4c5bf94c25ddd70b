//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! CORS is wide open: the browser frontend is served from a different
//! origin, matching the original deployment.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(endpoints::health::check))
        .route("/api/signup", post(endpoints::auth::signup))
        .route("/api/login", post(endpoints::auth::login))
        .route(
            "/api/predict",
            post(endpoints::predict::predict).get(endpoints::predict::history),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
}
