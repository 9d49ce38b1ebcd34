// Open-Meteo, NWS and NCMEC adapters
use crate::application::upstream_feeds::UpstreamFeeds;
use crate::domain::alerts::AlertItem;
use crate::domain::location::Coordinates;
use crate::domain::weather::CurrentConditions;
use crate::infrastructure::config::UpstreamSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;

const CURRENT_FIELDS: &str =
    "temperature_2m,precipitation,wind_speed_10m,relative_humidity_2m,weather_code";

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    #[serde(default)]
    current: Option<CurrentConditions>,
}

#[derive(Debug, Deserialize)]
struct NwsAlertCollection {
    #[serde(default)]
    features: Vec<NwsFeature>,
}

#[derive(Debug, Deserialize)]
struct NwsFeature {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    properties: NwsProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NwsProperties {
    event: Option<String>,
    headline: Option<String>,
    area_desc: Option<String>,
    severity: Option<String>,
    urgency: Option<String>,
    effective: Option<String>,
    expires: Option<String>,
    instruction: Option<String>,
}

impl From<NwsFeature> for AlertItem {
    fn from(feature: NwsFeature) -> Self {
        let p = feature.properties;
        AlertItem {
            id: feature.id,
            event: p.event,
            headline: p.headline,
            area_desc: p.area_desc,
            severity: p.severity,
            urgency: p.urgency,
            effective: p.effective,
            expires: p.expires,
            instruction: p.instruction,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    settings: UpstreamSettings,
}

impl HttpUpstream {
    pub fn new(settings: UpstreamSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build upstream HTTP client")?;
        Ok(Self { client, settings })
    }

    async fn get(&self, url: &str, accept: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.settings.user_agent)
            .header(ACCEPT, accept)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Upstream {} responded with status {}", url, status);
        }
        Ok(response)
    }
}

#[async_trait]
impl UpstreamFeeds for HttpUpstream {
    async fn current_weather(&self, coords: &Coordinates) -> Result<CurrentConditions> {
        let url = format!(
            "{}?latitude={}&longitude={}&current={}",
            self.settings.open_meteo_url,
            coords.latitude(),
            coords.longitude(),
            urlencoding::encode(CURRENT_FIELDS),
        );
        let data = self
            .get(&url, "application/json")
            .await?
            .json::<OpenMeteoResponse>()
            .await
            .context("Failed to parse Open-Meteo response")?;

        Ok(data.current.unwrap_or_default())
    }

    async fn active_alerts(&self, coords: &Coordinates) -> Result<Vec<AlertItem>> {
        let point = format!("{},{}", coords.latitude(), coords.longitude());
        let url = format!(
            "{}?point={}",
            self.settings.nws_alerts_url,
            urlencoding::encode(&point)
        );
        let data = self
            .get(&url, "application/geo+json")
            .await?
            .json::<NwsAlertCollection>()
            .await
            .context("Failed to parse NWS alerts")?;

        Ok(data.features.into_iter().map(AlertItem::from).collect())
    }

    async fn amber_feed(&self) -> Result<String> {
        self.get(&self.settings.amber_feed_url, "application/rss+xml, text/xml")
            .await?
            .text()
            .await
            .context("Failed to read AMBER feed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_router;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::{routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    async fn upstream() -> HttpUpstream {
        let router = Router::new()
            .route(
                "/forecast",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    assert_eq!(q["current"], CURRENT_FIELDS);
                    Json(json!({"latitude": 33.4, "current": {"time": "2025-01-01T00:00",
                        "temperature_2m": 31.2, "weather_code": 0}}))
                }),
            )
            .route(
                "/alerts/active",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    assert_eq!(q["point"], "33.4,-112");
                    Json(json!({"features": [{"id": "urn:1", "properties": {
                        "event": "Excessive Heat Warning", "areaDesc": "Maricopa",
                        "severity": "Severe"}}]}))
                }),
            )
            .route(
                "/amber.xml",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
            );
        let base = spawn_router(router).await;

        HttpUpstream::new(UpstreamSettings {
            open_meteo_url: format!("{}/forecast", base),
            nws_alerts_url: format!("{}/alerts/active", base),
            amber_feed_url: format!("{}/amber.xml", base),
            ..UpstreamSettings::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_current_weather() {
        let coords = Coordinates::new(33.4, -112.0).unwrap();
        let current = upstream().await.current_weather(&coords).await.unwrap();
        assert_eq!(current.temperature_2m, Some(31.2));
        assert_eq!(current.precipitation, None);
    }

    #[tokio::test]
    async fn test_active_alerts_maps_properties() {
        let coords = Coordinates::new(33.4, -112.0).unwrap();
        let alerts = upstream().await.active_alerts(&coords).await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id.as_deref(), Some("urn:1"));
        assert_eq!(alerts[0].area_desc.as_deref(), Some("Maricopa"));
        assert_eq!(alerts[0].severity.as_deref(), Some("Severe"));
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        assert!(upstream().await.amber_feed().await.is_err());
    }
}
