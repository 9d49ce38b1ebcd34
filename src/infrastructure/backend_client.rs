// HTTP client for the safety backend API
use crate::application::safety_backend::SafetyBackend;
use crate::domain::alerts::{AlertsResponse, AmberResponse};
use crate::domain::crime::CrimeResponse;
use crate::domain::location::Coordinates;
use crate::domain::protocols::ProtocolsResponse;
use crate::domain::weather::WeatherResponse;
use crate::infrastructure::http_fetch::HttpFetcher;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpSafetyBackend {
    fetcher: HttpFetcher,
    base_url: String,
}

impl HttpSafetyBackend {
    pub fn new(fetcher: HttpFetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    fn point_endpoint(&self, path: &str, coords: &Coordinates) -> String {
        format!(
            "{}?lat={}&lon={}",
            self.endpoint(path),
            urlencoding::encode(&coords.latitude().to_string()),
            urlencoding::encode(&coords.longitude().to_string()),
        )
    }
}

#[async_trait]
impl SafetyBackend for HttpSafetyBackend {
    async fn weather(&self, coords: &Coordinates) -> Result<WeatherResponse> {
        Ok(self.fetcher.get_json(&self.point_endpoint("weather", coords)).await?)
    }

    async fn alerts(&self, coords: &Coordinates) -> Result<AlertsResponse> {
        Ok(self.fetcher.get_json(&self.point_endpoint("alerts", coords)).await?)
    }

    async fn amber(&self) -> Result<AmberResponse> {
        Ok(self.fetcher.get_json(&self.endpoint("amber")).await?)
    }

    async fn protocols(&self) -> Result<ProtocolsResponse> {
        Ok(self.fetcher.get_json(&self.endpoint("protocols")).await?)
    }

    async fn crime(&self, coords: &Coordinates) -> Result<CrimeResponse> {
        Ok(self.fetcher.get_json(&self.point_endpoint("crime", coords)).await?)
    }
}
