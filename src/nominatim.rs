//! Nominatim HTTP adapter for free-text geocoding.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AdapterError;
use crate::model::Coordinate;
use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying user agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("hos-planner/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimGeocoder {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Best single match for `query`, keeping "no match" apart from failures.
    pub fn lookup(&self, query: &str) -> Result<Coordinate, AdapterError> {
        let url = format!("{}/search", self.config.base_url);
        let places = self
            .client
            .get(url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json::<Vec<NominatimPlace>>()?;

        first_match(places)
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, query: &str) -> Option<Coordinate> {
        match self.lookup(query) {
            Ok(coordinate) => {
                debug!(query, lat = coordinate.lat, lon = coordinate.lon, "geocoded");
                Some(coordinate)
            }
            Err(AdapterError::NotFound) => {
                debug!(query, "no geocoding match");
                None
            }
            Err(err) => {
                warn!(query, error = %err, "geocoding failed");
                None
            }
        }
    }
}

/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

fn first_match(places: Vec<NominatimPlace>) -> Result<Coordinate, AdapterError> {
    let place = places.into_iter().next().ok_or(AdapterError::NotFound)?;
    let lat = parse_degrees(&place.lat)?;
    let lon = parse_degrees(&place.lon)?;
    Ok(Coordinate::new(lat, lon))
}

fn parse_degrees(raw: &str) -> Result<f64, AdapterError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AdapterError::Malformed(format!("bad coordinate {:?}", raw)))
}
