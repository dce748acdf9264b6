//! Los Nachos Chipies website API server
//!
//! Proxies the site's news requests to the upstream news API so the browser
//! never talks cross-origin, caches successful upstream responses for a
//! short revalidation window, and translates upstream failures into
//! localized JSON error envelopes.

pub mod routes;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use nachos_services::NewsService;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService>,
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::api_routes())
        .layer(cors)
        .with_state(state)
}
