// Port for the public data feeds the backend API proxies
use crate::domain::alerts::AlertItem;
use crate::domain::location::Coordinates;
use crate::domain::weather::CurrentConditions;
use async_trait::async_trait;

#[async_trait]
pub trait UpstreamFeeds: Send + Sync {
    /// Open-Meteo current conditions
    async fn current_weather(&self, coords: &Coordinates) -> anyhow::Result<CurrentConditions>;

    /// NWS active alerts for a point
    async fn active_alerts(&self, coords: &Coordinates) -> anyhow::Result<Vec<AlertItem>>;

    /// Raw NCMEC AMBER RSS document
    async fn amber_feed(&self) -> anyhow::Result<String>;
}
