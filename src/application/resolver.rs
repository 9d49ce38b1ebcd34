// Coordinate resolution - device location or ZIP lookup behind one interface
use crate::application::geocoder::{GeocodeError, ZipGeocoder};
use crate::application::position::{PositionError, PositionSource};
use crate::domain::location::LocationFix;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Please enter a valid 5-digit ZIP code.")]
    Validation,
    #[error("Geolocation is not supported on this device.")]
    CapabilityUnavailable,
    #[error("Unable to retrieve your location: {0}")]
    Location(String),
    /// The message stays uniform; the cause is only reachable through `source()`.
    #[error("Could not find a location for ZIP code {zip}.")]
    Lookup {
        zip: String,
        #[source]
        source: GeocodeError,
    },
}

/// A 5-digit US ZIP code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let zip = input.trim();
        if zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(zip.to_string()))
        } else {
            Err(ResolveError::Validation)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
pub trait CoordinateProvider: Send + Sync {
    async fn resolve(&self) -> Result<LocationFix, ResolveError>;
}

pub struct DeviceLocation {
    source: Arc<dyn PositionSource>,
}

impl DeviceLocation {
    pub fn new(source: Arc<dyn PositionSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl CoordinateProvider for DeviceLocation {
    async fn resolve(&self) -> Result<LocationFix, ResolveError> {
        match self.source.current_position().await {
            Ok(coordinates) => Ok(LocationFix::new(coordinates)),
            Err(PositionError::Unsupported) => Err(ResolveError::CapabilityUnavailable),
            Err(e) => Err(ResolveError::Location(e.to_string())),
        }
    }
}

pub struct ZipLookup {
    geocoder: Arc<dyn ZipGeocoder>,
    input: String,
}

impl ZipLookup {
    pub fn new(geocoder: Arc<dyn ZipGeocoder>, input: impl Into<String>) -> Self {
        Self {
            geocoder,
            input: input.into(),
        }
    }
}

#[async_trait]
impl CoordinateProvider for ZipLookup {
    async fn resolve(&self) -> Result<LocationFix, ResolveError> {
        let zip = ZipCode::parse(&self.input)?;

        match self.geocoder.lookup(zip.as_str()).await {
            Ok(place) => {
                tracing::debug!(zip = zip.as_str(), place = %place.label(), "ZIP resolved");
                Ok(LocationFix::with_label(place.coordinates, place.label()))
            }
            Err(source) => {
                tracing::warn!(zip = zip.as_str(), error = ?source, "ZIP lookup failed");
                Err(ResolveError::Lookup {
                    zip: zip.as_str().to_string(),
                    source,
                })
            }
        }
    }
}
