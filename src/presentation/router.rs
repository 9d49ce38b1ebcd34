// Route table for the backend API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{alerts, amber, crime, health_check, protocols, weather};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/weather", get(weather))
        .route("/api/alerts", get(alerts))
        .route("/api/amber", get(amber))
        .route("/api/protocols", get(protocols))
        .route("/api/crime", get(crime))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
