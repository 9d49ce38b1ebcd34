// Crime statistics model and report formatter
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const NO_CRIME_DATA: &str = "No crime data available";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrimeStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default)]
    pub violent_crime: Option<f64>,
    #[serde(default)]
    pub homicide: Option<f64>,
    #[serde(default)]
    pub robbery: Option<f64>,
    #[serde(default)]
    pub aggravated_assault: Option<f64>,
    #[serde(default)]
    pub property_crime: Option<f64>,
    #[serde(default)]
    pub burglary: Option<f64>,
    #[serde(default)]
    pub larceny: Option<f64>,
    #[serde(default)]
    pub motor_vehicle_theft: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrimeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub stats: Option<CrimeStats>,
}

fn or_default<T: Display>(value: Option<T>, fallback: &str) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn format_crime(payload: Option<&CrimeResponse>) -> String {
    let Some(response) = payload else {
        return NO_CRIME_DATA.to_string();
    };
    let Some(stats) = response.stats.as_ref() else {
        return NO_CRIME_DATA.to_string();
    };

    let na = |v: Option<f64>| or_default(v, "N/A");

    format!(
        "State: {state}\nSource: {source}\nYear: {year}\n\n\
         Violent Crime: {violent}\n  Homicide: {homicide}\n  Robbery: {robbery}\n  Aggravated Assault: {assault}\n\n\
         Property Crime: {property}\n  Burglary: {burglary}\n  Larceny: {larceny}\n  Motor Vehicle Theft: {mvt}",
        state = or_default(response.state.as_deref(), "Unknown"),
        source = or_default(response.source.as_deref(), "Unknown"),
        year = or_default(stats.year, "N/A"),
        violent = na(stats.violent_crime),
        homicide = na(stats.homicide),
        robbery = na(stats.robbery),
        assault = na(stats.aggravated_assault),
        property = na(stats.property_crime),
        burglary = na(stats.burglary),
        larceny = na(stats.larceny),
        mvt = na(stats.motor_vehicle_theft),
    )
}
