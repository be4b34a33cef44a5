//! OSRM HTTP adapter for point-to-point driving routes.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AdapterError;
use crate::model::{Coordinate, RouteLeg};
use crate::polyline::Polyline;
use crate::traits::Router;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmRouter {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmRouter {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn fetch_route(&self, from: Coordinate, to: Coordinate) -> Result<RouteLeg, AdapterError> {
        let url = format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson",
            self.config.base_url, self.config.profile, from.lon, from.lat, to.lon, to.lat
        );

        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<OsrmRouteResponse>()?;

        leg_from_response(body, from, to)
    }
}

impl Router for OsrmRouter {
    fn route(&self, from: Coordinate, to: Coordinate) -> RouteLeg {
        match self.fetch_route(from, to) {
            Ok(leg) => {
                debug!(
                    distance_km = leg.distance_km,
                    duration_hr = leg.duration_hr,
                    points = leg.path.len(),
                    "routed leg"
                );
                leg
            }
            Err(err) => {
                warn!(?from, ?to, error = %err, "routing failed, using empty leg");
                RouteLeg::unroutable(from, to)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Meters.
    distance: f64,
    /// Seconds.
    duration: f64,
    geometry: OsrmGeometry,
}

/// GeoJSON LineString, `[lon, lat]` pairs.
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

fn leg_from_response(
    body: OsrmRouteResponse,
    from: Coordinate,
    to: Coordinate,
) -> Result<RouteLeg, AdapterError> {
    if body.code == "NoRoute" {
        return Err(AdapterError::NotFound);
    }
    if body.code != "Ok" {
        return Err(AdapterError::Malformed(format!("OSRM code {}", body.code)));
    }
    let route = body.routes.into_iter().next().ok_or(AdapterError::NotFound)?;

    let path = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lon, lat]| Coordinate::new(lat, lon))
        .collect();

    Ok(RouteLeg {
        origin: from,
        destination: to,
        distance_km: route.distance / 1000.0,
        duration_hr: route.duration / 3600.0,
        path: Polyline::new(path),
    })
}
