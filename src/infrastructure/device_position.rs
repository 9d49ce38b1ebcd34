// Device position from configuration or a GPS daemon's position file
use crate::application::position::{PositionError, PositionSource};
use crate::domain::location::Coordinates;
use crate::infrastructure::config::DeviceSettings;
use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct PositionFix {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone)]
pub struct ConfiguredPosition {
    settings: DeviceSettings,
}

impl ConfiguredPosition {
    pub fn new(settings: DeviceSettings) -> Self {
        Self { settings }
    }

    async fn read_position_file(&self, path: &Path) -> Result<Coordinates, PositionError> {
        let timeout = Duration::from_millis(self.settings.timeout_ms);
        let contents = match tokio::time::timeout(timeout, tokio::fs::read_to_string(path)).await {
            Err(_) => {
                return Err(PositionError::Timeout(format!(
                    "no position fix within {}ms",
                    self.settings.timeout_ms
                )));
            }
            Ok(Err(e)) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(PositionError::PermissionDenied(format!(
                    "cannot read {}",
                    path.display()
                )));
            }
            Ok(Err(e)) => {
                return Err(PositionError::Unavailable(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )));
            }
            Ok(Ok(contents)) => contents,
        };

        let fix: PositionFix = serde_json::from_str(&contents)
            .map_err(|e| PositionError::Unavailable(format!("malformed position fix: {}", e)))?;
        Coordinates::new(fix.latitude, fix.longitude)
            .map_err(|e| PositionError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl PositionSource for ConfiguredPosition {
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        if let Some(path) = &self.settings.position_file {
            return self.read_position_file(path).await;
        }

        match (self.settings.latitude, self.settings.longitude) {
            (Some(lat), Some(lon)) => {
                Coordinates::new(lat, lon).map_err(|e| PositionError::Unavailable(e.to_string()))
            }
            _ => Err(PositionError::Unsupported),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn settings() -> DeviceSettings {
        DeviceSettings::default()
    }

    #[tokio::test]
    async fn test_unconfigured_device_is_unsupported() {
        let source = ConfiguredPosition::new(settings());
        assert_eq!(source.current_position().await, Err(PositionError::Unsupported));

        // Half a position is still no capability
        let source = ConfiguredPosition::new(DeviceSettings {
            latitude: Some(10.0),
            ..settings()
        });
        assert_eq!(source.current_position().await, Err(PositionError::Unsupported));
    }

    #[tokio::test]
    async fn test_fixed_position() {
        let source = ConfiguredPosition::new(DeviceSettings {
            latitude: Some(33.4484),
            longitude: Some(-112.074),
            ..settings()
        });
        let coords = source.current_position().await.unwrap();
        assert_eq!(coords.longitude(), -112.074);
    }

    #[tokio::test]
    async fn test_position_file() {
        let path = temp_file("position-ok", r#"{"latitude": 40.7128, "longitude": -74.006}"#);
        let source = ConfiguredPosition::new(DeviceSettings {
            position_file: Some(path.clone()),
            ..settings()
        });
        let coords = source.current_position().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(coords.latitude(), 40.7128);
    }

    #[tokio::test]
    async fn test_position_file_failures() {
        let missing = ConfiguredPosition::new(DeviceSettings {
            position_file: Some(std::env::temp_dir().join("no-such-position-file.json")),
            ..settings()
        });
        assert!(matches!(
            missing.current_position().await,
            Err(PositionError::Unavailable(_))
        ));

        let path = temp_file("position-bad", r#"{"latitude": 123.0, "longitude": 0}"#);
        let out_of_range = ConfiguredPosition::new(DeviceSettings {
            position_file: Some(path.clone()),
            ..settings()
        });
        let result = out_of_range.current_position().await;
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(PositionError::Unavailable(_))));
    }
}
