use crate::domain::protocols::{ProtocolEntry, ProtocolsResponse};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const PROTOCOLS_TOML: &str = include_str!("../../config/protocols.toml");

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendSettings,
    pub geocoder: GeocoderSettings,
    pub device: DeviceSettings,
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5002".to_string(),
            timeout_secs: None,
        }
    }
}

impl BackendSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeocoderSettings {
    pub base_url: String,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.zippopotam.us".to_string(),
        }
    }
}

/// Where the device position comes from. Leaving everything unset means the
/// device has no location capability.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DeviceSettings {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub position_file: Option<PathBuf>,
    pub timeout_ms: u64,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            position_file: None,
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5002".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamSettings {
    pub open_meteo_url: String,
    pub nws_alerts_url: String,
    pub amber_feed_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            open_meteo_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            nws_alerts_url: "https://api.weather.gov/alerts/active".to_string(),
            amber_feed_url: "https://www.missingkids.org/feeds/amber.xml".to_string(),
            timeout_secs: 12,
            user_agent: concat!("safety-dashboard/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Load settings from an optional file (`path` without extension) overlaid by
/// `SAFETY__SECTION__KEY` environment variables.
pub fn load_config(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("SAFETY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Built-in emergency guidance
pub fn load_protocols() -> anyhow::Result<Vec<ProtocolEntry>> {
    let parsed: ProtocolsResponse = toml::from_str(PROTOCOLS_TOML)?;
    Ok(parsed.protocols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config("config/does-not-exist").unwrap();
        assert_eq!(config.geocoder.base_url, "https://api.zippopotam.us");
        assert_eq!(config.upstream.timeout_secs, 12);
        assert_eq!(config.device.timeout_ms, 10_000);
        assert!(config.device.position_file.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("safety-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[backend]\nbase_url = \"http://backend:8080\"\ntimeout_secs = 3\n\n[device]\nlatitude = 40.0\nlongitude = -75.0\n",
        )
        .unwrap();

        let stem = path.with_extension("");
        let config = load_config(stem.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.backend.base_url, "http://backend:8080");
        assert_eq!(config.backend.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(config.device.latitude, Some(40.0));
        assert_eq!(config.server.bind, "0.0.0.0:5002");
    }

    #[test]
    fn test_builtin_protocols() {
        let protocols = load_protocols().unwrap();
        let titles: Vec<&str> = protocols.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Tornado Safety", "Earthquake Safety", "Wildfire Safety", "Flood Safety"]
        );
        assert!(protocols.iter().all(|p| p.steps.len() == 3));
        assert_eq!(protocols[0].kind.as_deref(), Some("tornado"));
    }
}
