// Zippopotam.us ZIP-code geocoder
use crate::application::geocoder::{GeocodeError, ZipGeocoder, ZipPlace};
use crate::domain::location::Coordinates;
use crate::infrastructure::http_fetch::HttpFetcher;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ZipResponse {
    #[serde(default)]
    places: Vec<ZipResponsePlace>,
}

// Zippopotam returns coordinates as strings
#[derive(Debug, Deserialize)]
struct ZipResponsePlace {
    #[serde(default)]
    latitude: Value,
    #[serde(default)]
    longitude: Value,
    #[serde(default, rename = "place name")]
    place_name: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

fn degrees(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct ZippopotamGeocoder {
    fetcher: HttpFetcher,
    base_url: String,
}

impl ZippopotamGeocoder {
    pub fn new(fetcher: HttpFetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn parse(response: ZipResponse) -> Result<ZipPlace, GeocodeError> {
        let place = response.places.into_iter().next().ok_or(GeocodeError::NoPlaces)?;
        let latitude = degrees(&place.latitude).ok_or(GeocodeError::Malformed("latitude"))?;
        let longitude = degrees(&place.longitude).ok_or(GeocodeError::Malformed("longitude"))?;

        Ok(ZipPlace {
            coordinates: Coordinates::new(latitude, longitude)?,
            place_name: place.place_name.unwrap_or_default(),
            state: place.state.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl ZipGeocoder for ZippopotamGeocoder {
    async fn lookup(&self, zip: &str) -> Result<ZipPlace, GeocodeError> {
        let url = format!("{}/us/{}", self.base_url, urlencoding::encode(zip));
        let response: ZipResponse = self.fetcher.get_json(&url).await?;
        Self::parse(response)
    }
}
