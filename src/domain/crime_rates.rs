// Approximate state lookup and per-state mock crime rates
use super::crime::{CrimeResponse, CrimeStats};
use super::location::Coordinates;

struct StateBox {
    abbr: &'static str,
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl StateBox {
    const fn new(abbr: &'static str, lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            abbr,
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

// Boxes overlap; order matters and the first match wins.
const STATE_BOXES: &[StateBox] = &[
    StateBox::new("FL", 24.5, 31.0, -87.6, -80.0),
    StateBox::new("GA", 30.0, 35.0, -88.0, -80.0),
    StateBox::new("SC", 32.0, 35.0, -88.0, -80.0),
    StateBox::new("NC", 33.0, 36.0, -84.0, -75.0),
    StateBox::new("VA", 36.0, 39.0, -84.0, -75.0),
    StateBox::new("MD", 38.0, 40.0, -79.0, -75.0),
    StateBox::new("PA", 39.0, 42.0, -80.0, -74.0),
    StateBox::new("NY", 40.0, 45.0, -79.0, -71.0),
    StateBox::new("CT", 41.0, 42.0, -73.0, -71.0),
    StateBox::new("MA", 41.0, 43.0, -72.0, -70.0),
    StateBox::new("VT", 43.0, 45.0, -72.0, -70.0),
    StateBox::new("ME", 43.0, 47.0, -71.0, -66.0),
    StateBox::new("NJ", 40.0, 42.0, -75.0, -73.0),
    StateBox::new("DE", 38.0, 40.0, -75.0, -73.0),
    StateBox::new("AZ", 31.0, 37.0, -114.0, -109.0),
    StateBox::new("AZ", 31.0, 37.0, -115.0, -108.0),
    StateBox::new("NM", 31.0, 37.0, -109.0, -103.0),
    StateBox::new("TX", 25.0, 36.0, -106.0, -93.0),
    StateBox::new("AR", 33.0, 37.0, -94.0, -89.0),
    StateBox::new("LA", 30.0, 35.0, -94.0, -88.0),
    StateBox::new("MS", 30.0, 35.0, -91.0, -88.0),
    StateBox::new("AL", 30.0, 35.0, -88.0, -84.0),
    StateBox::new("FL", 24.0, 31.0, -87.0, -80.0),
    StateBox::new("OH", 40.0, 42.0, -84.0, -80.0),
    StateBox::new("WV", 37.0, 40.0, -85.0, -81.0),
    StateBox::new("KY", 36.0, 39.0, -85.0, -81.0),
    StateBox::new("TN", 35.0, 37.0, -90.0, -81.0),
    StateBox::new("IN", 38.0, 40.0, -88.0, -84.0),
    StateBox::new("IL", 37.0, 42.0, -91.0, -87.0),
    StateBox::new("IA", 40.0, 43.0, -96.0, -90.0),
    StateBox::new("WI", 42.0, 47.0, -97.0, -89.0),
    StateBox::new("MN", 43.0, 49.0, -97.0, -89.0),
    StateBox::new("NE", 40.0, 43.0, -104.0, -95.0),
    StateBox::new("KS", 38.0, 40.0, -102.0, -94.0),
    StateBox::new("OK", 35.0, 37.0, -103.0, -94.0),
    StateBox::new("NV", 36.0, 42.0, -120.0, -114.0),
    StateBox::new("CA", 32.0, 42.0, -124.0, -114.0),
    StateBox::new("WA", 45.0, 49.0, -125.0, -116.0),
    StateBox::new("OR", 42.0, 46.0, -125.0, -116.0),
    StateBox::new("CO", 40.0, 45.0, -111.0, -104.0),
    StateBox::new("UT", 41.0, 45.0, -112.0, -104.0),
    StateBox::new("MT", 42.0, 49.0, -117.0, -104.0),
    StateBox::new("ND", 44.0, 49.0, -117.0, -104.0),
    StateBox::new("SD", 43.0, 46.0, -104.0, -96.0),
    StateBox::new("WY", 40.0, 43.0, -104.0, -95.0),
    StateBox::new("AK", 45.0, 49.0, -125.0, -66.0),
    StateBox::new("HI", 18.0, 22.0, -162.0, -154.0),
];

const PHOENIX_AREA: StateBox = StateBox::new("AZ", 33.0, 34.0, -112.5, -111.0);

// homicide, robbery, aggravated_assault, burglary, larceny, motor_vehicle_theft,
// violent_crime, property_crime (per 100k)
type Rates = [u32; 8];

const STATE_RATES: &[(&str, Rates)] = &[
    ("NY", [5, 120, 180, 280, 1200, 150, 305, 1630]),
    ("CA", [4, 95, 220, 320, 1400, 280, 319, 2000]),
    ("TX", [6, 110, 250, 350, 1100, 200, 366, 1650]),
    ("FL", [7, 130, 200, 300, 1000, 180, 337, 1480]),
    ("AZ", [8, 140, 280, 400, 900, 250, 428, 1550]),
    ("IL", [9, 150, 300, 450, 800, 220, 459, 1470]),
    ("PA", [5, 100, 180, 250, 700, 150, 285, 1100]),
    ("OH", [6, 110, 200, 280, 750, 160, 316, 1190]),
    ("GA", [7, 120, 220, 320, 850, 180, 347, 1350]),
    ("NC", [6, 105, 190, 270, 720, 140, 301, 1130]),
    ("MI", [8, 125, 240, 350, 780, 200, 373, 1330]),
    ("NJ", [4, 90, 160, 220, 650, 120, 254, 990]),
    ("VA", [5, 95, 170, 240, 680, 130, 270, 1050]),
    ("WA", [4, 85, 150, 200, 600, 110, 239, 910]),
    ("MA", [3, 80, 140, 180, 550, 100, 223, 830]),
    ("TN", [7, 115, 210, 290, 760, 170, 332, 1220]),
    ("IN", [6, 100, 180, 260, 700, 150, 286, 1110]),
    ("MO", [8, 130, 250, 340, 820, 190, 388, 1350]),
    ("MD", [9, 140, 270, 380, 900, 210, 419, 1490]),
    ("WI", [5, 90, 160, 220, 620, 120, 255, 960]),
    ("CO", [4, 85, 150, 200, 580, 110, 239, 890]),
    ("MN", [3, 75, 130, 180, 520, 100, 208, 800]),
    ("SC", [8, 125, 230, 320, 800, 180, 363, 1300]),
    ("AL", [9, 135, 260, 360, 850, 200, 404, 1420]),
    ("LA", [12, 160, 320, 420, 950, 250, 492, 1620]),
    ("KY", [6, 105, 190, 270, 720, 150, 301, 1140]),
    ("OR", [4, 80, 140, 190, 560, 110, 224, 860]),
    ("OK", [7, 115, 220, 300, 750, 170, 342, 1220]),
    ("CT", [3, 70, 120, 160, 480, 90, 193, 730]),
    ("UT", [2, 60, 100, 140, 400, 80, 162, 620]),
    ("IA", [2, 55, 90, 120, 350, 70, 147, 540]),
    ("NV", [6, 110, 200, 280, 700, 160, 316, 1140]),
    ("AR", [8, 125, 240, 330, 780, 180, 373, 1290]),
    ("MS", [10, 145, 280, 380, 900, 220, 435, 1500]),
    ("KS", [5, 90, 160, 220, 620, 130, 255, 970]),
    ("NM", [8, 130, 250, 340, 800, 190, 388, 1330]),
    ("NE", [3, 65, 110, 150, 420, 90, 178, 660]),
    ("WV", [6, 100, 180, 250, 680, 140, 286, 1070]),
    ("ID", [2, 50, 80, 110, 320, 60, 132, 490]),
    ("HI", [2, 45, 70, 100, 280, 50, 117, 430]),
    ("NH", [1, 40, 60, 80, 240, 40, 101, 360]),
    ("ME", [1, 35, 50, 70, 200, 35, 86, 305]),
    ("MT", [2, 45, 70, 90, 260, 50, 117, 400]),
    ("RI", [2, 50, 80, 100, 300, 60, 132, 460]),
    ("DE", [4, 70, 120, 160, 480, 100, 194, 740]),
    ("SD", [2, 40, 60, 80, 220, 40, 102, 340]),
    ("ND", [1, 30, 40, 60, 160, 30, 71, 250]),
    ("AK", [4, 60, 100, 120, 360, 80, 164, 560]),
    ("VT", [1, 25, 35, 50, 140, 25, 61, 215]),
    ("WY", [1, 20, 30, 40, 120, 20, 51, 180]),
];

const NATIONAL_DEFAULT: Rates = [5, 100, 180, 250, 700, 150, 285, 1100];
const DEMO_RATES: Rates = [3, 55, 210, 230, 900, 220, 420, 1350];
const DEMO_YEAR: i32 = 2023;

pub fn state_for_coordinates(coords: &Coordinates) -> Option<&'static str> {
    let (lat, lon) = (coords.latitude(), coords.longitude());
    STATE_BOXES
        .iter()
        .find(|b| b.contains(lat, lon))
        .or_else(|| PHOENIX_AREA.contains(lat, lon).then_some(&PHOENIX_AREA))
        .map(|b| b.abbr)
}

fn stats_from(rates: Rates, year: Option<i32>) -> CrimeStats {
    let [homicide, robbery, assault, burglary, larceny, mvt, violent, property] = rates.map(f64::from);
    CrimeStats {
        year,
        violent_crime: Some(violent),
        homicide: Some(homicide),
        robbery: Some(robbery),
        aggravated_assault: Some(assault),
        property_crime: Some(property),
        burglary: Some(burglary),
        larceny: Some(larceny),
        motor_vehicle_theft: Some(mvt),
    }
}

/// Build the crime payload for a point. Points outside every known state
/// get demo figures.
pub fn crime_report(coords: &Coordinates) -> CrimeResponse {
    match state_for_coordinates(coords) {
        Some(state) => {
            let rates = STATE_RATES
                .iter()
                .find(|(abbr, _)| *abbr == state)
                .map(|(_, r)| *r)
                .unwrap_or(NATIONAL_DEFAULT);
            CrimeResponse {
                scope: Some("state".to_string()),
                state: Some(state.to_string()),
                source: Some("mock".to_string()),
                stats: Some(stats_from(rates, None)),
            }
        }
        None => CrimeResponse {
            scope: Some("demo".to_string()),
            state: None,
            source: Some("demo".to_string()),
            stats: Some(stats_from(DEMO_RATES, Some(DEMO_YEAR))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    #[test]
    fn test_state_lookup_first_match_wins() {
        assert_eq!(state_for_coordinates(&at(25.7617, -80.1918)), Some("FL"));
        // Inside both the GA and SC boxes; GA is listed first
        assert_eq!(state_for_coordinates(&at(33.0, -81.0)), Some("GA"));
        assert_eq!(state_for_coordinates(&at(34.05, -118.24)), Some("CA"));
        assert_eq!(state_for_coordinates(&at(21.3, -157.8)), Some("HI"));
        assert_eq!(state_for_coordinates(&at(51.5, -0.12)), None);
    }

    #[test]
    fn test_crime_report_for_known_state() {
        let report = crime_report(&at(33.4484, -112.074));
        assert_eq!(report.state.as_deref(), Some("AZ"));
        assert_eq!(report.source.as_deref(), Some("mock"));
        let stats = report.stats.unwrap();
        assert_eq!(stats.homicide, Some(8.0));
        assert_eq!(stats.violent_crime, Some(428.0));
        assert_eq!(stats.year, None);
    }

    #[test]
    fn test_overlapping_boxes_resolve_in_order() {
        // Inside both the MT and ND boxes
        let report = crime_report(&at(46.0, -110.0));
        assert_eq!(report.state.as_deref(), Some("MT"));
        assert_eq!(report.stats.unwrap().homicide, Some(2.0));
    }

    #[test]
    fn test_crime_report_demo_fallback() {
        let report = crime_report(&at(48.85, 2.35));
        assert_eq!(report.scope.as_deref(), Some("demo"));
        assert_eq!(report.state, None);
        let stats = report.stats.unwrap();
        assert_eq!(stats.year, Some(2023));
        assert_eq!(stats.property_crime, Some(1350.0));
    }
}
