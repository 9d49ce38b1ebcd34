// HTTP request handlers
use crate::domain::alerts::AmberResponse;
use crate::domain::location::Coordinates;
use crate::domain::weather::WeatherResponse;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PointQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl PointQuery {
    fn coordinates(&self) -> Result<Coordinates, Response> {
        let (Some(lat), Some(lon)) = (
            self.lat.as_deref().filter(|s| !s.is_empty()),
            self.lon.as_deref().filter(|s| !s.is_empty()),
        ) else {
            return Err(bad_request("lat and lon are required"));
        };

        let (Ok(lat), Ok(lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) else {
            return Err(bad_request("lat and lon must be numbers"));
        };

        Coordinates::new(lat, lon).map_err(|e| bad_request(&e.to_string()))
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

pub async fn weather(
    Query(query): Query<PointQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let coords = match query.coordinates() {
        Ok(coords) => coords,
        Err(response) => return response,
    };

    match state.feed_service.weather(&coords).await {
        Ok(weather) => Json(weather).into_response(),
        Err(e) => {
            tracing::warn!(error = ?e, "Error fetching weather");
            let body = WeatherResponse {
                current: None,
                source: Some("open-meteo".to_string()),
                note: Some("unavailable".to_string()),
            };
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
    }
}

pub async fn alerts(
    Query(query): Query<PointQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match query.coordinates() {
        Ok(coords) => Json(state.feed_service.alerts(&coords).await).into_response(),
        Err(response) => response,
    }
}

pub async fn amber(State(state): State<Arc<AppState>>) -> Response {
    match state.feed_service.amber().await {
        Ok(amber) => Json(amber).into_response(),
        Err(e) => {
            tracing::warn!(error = ?e, "Error fetching AMBER feed");
            let body = AmberResponse {
                items: Vec::new(),
                source: Some("NCMEC".to_string()),
                note: Some("unavailable".to_string()),
            };
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
    }
}

pub async fn protocols(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.feed_service.protocols())
}

pub async fn crime(
    Query(query): Query<PointQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match query.coordinates() {
        Ok(coords) => Json(state.feed_service.crime(&coords)).into_response(),
        Err(response) => response,
    }
}
