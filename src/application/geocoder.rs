// Port for ZIP-code geocoding
use crate::domain::location::{CoordinateError, Coordinates};
use crate::infrastructure::http_fetch::FetchError;
use async_trait::async_trait;
use thiserror::Error;

/// First place returned for a ZIP code.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipPlace {
    pub coordinates: Coordinates,
    pub place_name: String,
    pub state: String,
}

impl ZipPlace {
    pub fn label(&self) -> String {
        format!("{}, {}", self.place_name, self.state)
    }
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed")]
    Request(#[from] FetchError),
    #[error("geocoding response contained no places")]
    NoPlaces,
    #[error("geocoding response has a malformed {0}")]
    Malformed(&'static str),
    #[error("geocoded point is out of range")]
    OutOfRange(#[from] CoordinateError),
}

#[async_trait]
pub trait ZipGeocoder: Send + Sync {
    async fn lookup(&self, zip: &str) -> Result<ZipPlace, GeocodeError>;
}
