// Feed service - Use cases behind the backend API routes
use crate::application::upstream_feeds::UpstreamFeeds;
use crate::domain::alerts::{AlertsResponse, AmberResponse};
use crate::domain::crime::CrimeResponse;
use crate::domain::crime_rates::crime_report;
use crate::domain::location::Coordinates;
use crate::domain::protocols::{ProtocolEntry, ProtocolsResponse};
use crate::domain::weather::WeatherResponse;
use crate::infrastructure::amber_rss::parse_amber_items;
use std::sync::Arc;

#[derive(Clone)]
pub struct SafetyFeedService {
    upstream: Arc<dyn UpstreamFeeds>,
    protocols: Arc<Vec<ProtocolEntry>>,
}

impl SafetyFeedService {
    pub fn new(upstream: Arc<dyn UpstreamFeeds>, protocols: Vec<ProtocolEntry>) -> Self {
        Self {
            upstream,
            protocols: Arc::new(protocols),
        }
    }

    pub async fn weather(&self, coords: &Coordinates) -> anyhow::Result<WeatherResponse> {
        let current = self.upstream.current_weather(coords).await?;
        Ok(WeatherResponse {
            current: Some(current),
            source: Some("open-meteo".to_string()),
            note: None,
        })
    }

    /// Alerts degrade to an empty list when NWS is unreachable.
    pub async fn alerts(&self, coords: &Coordinates) -> AlertsResponse {
        let alerts = match self.upstream.active_alerts(coords).await {
            Ok(alerts) => alerts,
            Err(e) => {
                tracing::warn!(error = ?e, "NWS alerts unavailable");
                Vec::new()
            }
        };
        AlertsResponse {
            alerts,
            source: Some("NWS".to_string()),
        }
    }

    pub async fn amber(&self) -> anyhow::Result<AmberResponse> {
        let feed = self.upstream.amber_feed().await?;
        let items = parse_amber_items(&feed);
        tracing::debug!("Parsed {} AMBER items", items.len());
        Ok(AmberResponse {
            items,
            source: Some("NCMEC".to_string()),
            note: None,
        })
    }

    pub fn protocols(&self) -> ProtocolsResponse {
        ProtocolsResponse {
            protocols: self.protocols.as_ref().clone(),
        }
    }

    pub fn crime(&self, coords: &Coordinates) -> CrimeResponse {
        let report = crime_report(coords);
        tracing::debug!(
            latitude = coords.latitude(),
            longitude = coords.longitude(),
            state = ?report.state,
            "Mapped coordinates to state"
        );
        report
    }
}
