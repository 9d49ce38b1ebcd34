// Weather domain model and formatter
use serde::{Deserialize, Serialize};

pub const NO_WEATHER_DATA: &str = "No weather data available";
const MISSING: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub current: Option<CurrentConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub fn celsius_to_fahrenheit(celsius: f64) -> i64 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i64
}

fn field(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", v, unit),
        None => MISSING.to_string(),
    }
}

pub fn format_weather(payload: Option<&WeatherResponse>) -> String {
    let Some(current) = payload.and_then(|p| p.current.as_ref()) else {
        return NO_WEATHER_DATA.to_string();
    };

    let temperature = match current.temperature_2m {
        Some(c) => format!("{}°C ({}°F)", c, celsius_to_fahrenheit(c)),
        None => MISSING.to_string(),
    };

    [
        format!("Temperature: {}", temperature),
        format!("Precipitation: {}", field(current.precipitation, " mm")),
        format!("Wind Speed: {}", field(current.wind_speed_10m, " km/h")),
        format!("Humidity: {}", field(current.relative_humidity_2m, "%")),
        format!("Weather Code: {}", field(current.weather_code, "")),
    ]
    .join("\n")
}
