//! Deterministic stand-ins for the geocoding and routing services.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use hos_planner::model::{Coordinate, RouteLeg};
use hos_planner::polyline::Polyline;
use hos_planner::traits::{Geocoder, Router};

use super::interstate_locations::Location;

/// Geocoder answering from a fixed name table; unknown names resolve to `None`.
#[derive(Debug, Default)]
pub struct TableGeocoder {
    places: HashMap<String, Coordinate>,
    queries: Mutex<Vec<String>>,
}

impl TableGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, lat: f64, lon: f64) -> Self {
        self.places.insert(name.to_string(), Coordinate::new(lat, lon));
        self
    }

    pub fn with_locations(mut self, locations: &[Location]) -> Self {
        for location in locations {
            self.places.insert(location.name.to_string(), location.coordinate());
        }
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Geocoder for TableGeocoder {
    fn geocode(&self, query: &str) -> Option<Coordinate> {
        self.queries.lock().unwrap().push(query.to_string());
        self.places.get(query).copied()
    }
}

fn key(from: Coordinate, to: Coordinate) -> String {
    format!("{:.6},{:.6};{:.6},{:.6}", from.lat, from.lon, to.lat, to.lon)
}

/// Router answering from a fixed leg table; unknown pairs are unroutable.
///
/// Paths are straight lines with `path_points` evenly spaced points.
#[derive(Debug)]
pub struct TableRouter {
    legs: HashMap<String, (f64, f64)>,
    path_points: usize,
    /// Artificial latency per leg, keyed like `legs`.
    delays: HashMap<String, Duration>,
}

impl TableRouter {
    pub fn new(path_points: usize) -> Self {
        Self {
            legs: HashMap::new(),
            path_points,
            delays: HashMap::new(),
        }
    }

    pub fn leg(mut self, from: Coordinate, to: Coordinate, distance_km: f64, duration_hr: f64) -> Self {
        self.legs.insert(key(from, to), (distance_km, duration_hr));
        self
    }

    pub fn delayed(mut self, from: Coordinate, to: Coordinate, millis: u64) -> Self {
        self.delays.insert(key(from, to), Duration::from_millis(millis));
        self
    }
}

pub fn straight_path(from: Coordinate, to: Coordinate, points: usize) -> Polyline {
    if points < 2 {
        return Polyline::new(vec![from; points]);
    }
    let steps = (points - 1) as f64;
    Polyline::new(
        (0..points)
            .map(|i| {
                let t = i as f64 / steps;
                Coordinate::new(
                    from.lat + (to.lat - from.lat) * t,
                    from.lon + (to.lon - from.lon) * t,
                )
            })
            .collect(),
    )
}

impl Router for TableRouter {
    fn route(&self, from: Coordinate, to: Coordinate) -> RouteLeg {
        let key = key(from, to);
        if let Some(delay) = self.delays.get(&key) {
            std::thread::sleep(*delay);
        }
        match self.legs.get(&key) {
            Some((distance_km, duration_hr)) => RouteLeg {
                origin: from,
                destination: to,
                distance_km: *distance_km,
                duration_hr: *duration_hr,
                path: straight_path(from, to, self.path_points),
            },
            None => RouteLeg::unroutable(from, to),
        }
    }
}
