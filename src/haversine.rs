//! Haversine router (fallback when OSRM unavailable).
//!
//! Uses great-circle distance stretched by a road factor and an assumed
//! highway speed. Less accurate than OSRM (ignores roads) but always available.

use crate::model::{Coordinate, RouteLeg};
use crate::polyline::Polyline;
use crate::traits::Router;

/// Average truck speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 80.0;

/// Ratio of road distance to straight-line distance.
const DEFAULT_ROAD_FACTOR: f64 = 1.3;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone)]
pub struct HaversineRouter {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
    pub road_factor: f64,
}

impl Default for HaversineRouter {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            road_factor: DEFAULT_ROAD_FACTOR,
        }
    }
}

impl HaversineRouter {
    pub fn new(speed_kmh: f64, road_factor: f64) -> Self {
        Self {
            speed_kmh,
            road_factor,
        }
    }
}

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

impl Router for HaversineRouter {
    fn route(&self, from: Coordinate, to: Coordinate) -> RouteLeg {
        if self.speed_kmh <= 0.0 {
            return RouteLeg::unroutable(from, to);
        }
        let distance_km = haversine_km(from, to) * self.road_factor;
        RouteLeg {
            origin: from,
            destination: to,
            distance_km,
            duration_hr: distance_km / self.speed_kmh,
            path: Polyline::new(vec![from, to]),
        }
    }
}
