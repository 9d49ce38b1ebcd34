// Location domain model
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

/// A validated WGS84 point. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        // NaN fails both range checks
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Resolved position plus an optional human label ("City, ST").
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFix {
    pub coordinates: Coordinates,
    pub label: Option<String>,
}

impl LocationFix {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            label: None,
        }
    }

    pub fn with_label(coordinates: Coordinates, label: impl Into<String>) -> Self {
        Self {
            coordinates,
            label: Some(label.into()),
        }
    }
}

pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("Latitude: {:.4}, Longitude: {:.4}", latitude, longitude)
}

/// Text for the coordinates region
pub fn describe_fix(fix: &LocationFix) -> String {
    let coords = format_coordinates(fix.coordinates.latitude(), fix.coordinates.longitude());
    match &fix.label {
        Some(label) => format!("{}\nNear: {}", coords, label),
        None => coords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinates_rounds_to_four_places() {
        assert_eq!(
            format_coordinates(40.712776, -74.005974),
            "Latitude: 40.7128, Longitude: -74.0060"
        );
        assert_eq!(format_coordinates(0.0, 0.0), "Latitude: 0.0000, Longitude: 0.0000");
        assert_eq!(
            format_coordinates(-90.0, 180.0),
            "Latitude: -90.0000, Longitude: 180.0000"
        );
    }

    #[test]
    fn test_coordinates_reject_out_of_range() {
        assert!(Coordinates::new(90.0, -180.0).is_ok());
        assert_eq!(
            Coordinates::new(90.5, 0.0),
            Err(CoordinateError::Latitude(90.5))
        );
        assert_eq!(
            Coordinates::new(0.0, -180.1),
            Err(CoordinateError::Longitude(-180.1))
        );
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_describe_fix_with_label() {
        let coords = Coordinates::new(33.4484, -112.074).unwrap();
        let fix = LocationFix::with_label(coords, "Phoenix, Arizona");
        assert_eq!(
            describe_fix(&fix),
            "Latitude: 33.4484, Longitude: -112.0740\nNear: Phoenix, Arizona"
        );
        assert_eq!(
            describe_fix(&LocationFix::new(coords)),
            "Latitude: 33.4484, Longitude: -112.0740"
        );
    }
}
