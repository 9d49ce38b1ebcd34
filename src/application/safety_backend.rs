// Port for the backend API that feeds each dashboard region
use crate::domain::alerts::{AlertsResponse, AmberResponse};
use crate::domain::crime::CrimeResponse;
use crate::domain::location::Coordinates;
use crate::domain::protocols::ProtocolsResponse;
use crate::domain::weather::WeatherResponse;
use async_trait::async_trait;

#[async_trait]
pub trait SafetyBackend: Send + Sync {
    /// Current conditions at a point
    async fn weather(&self, coords: &Coordinates) -> anyhow::Result<WeatherResponse>;

    /// Active government alerts covering a point
    async fn alerts(&self, coords: &Coordinates) -> anyhow::Result<AlertsResponse>;

    /// Nationwide AMBER alerts
    async fn amber(&self) -> anyhow::Result<AmberResponse>;

    /// Static emergency guidance
    async fn protocols(&self) -> anyhow::Result<ProtocolsResponse>;

    /// Crime statistics for the state containing a point
    async fn crime(&self, coords: &Coordinates) -> anyhow::Result<CrimeResponse>;
}
