//! Core value types shared by the itinerary, duty and timeline stages.

use serde::{Deserialize, Serialize, Serializer};

use crate::polyline::Polyline;

/// A resolved position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A named stop on a log sheet. `coordinate` is `None` when geocoding failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub label: String,
    pub coordinate: Option<Coordinate>,
}

impl Waypoint {
    pub fn new(label: impl Into<String>, coordinate: Option<Coordinate>) -> Self {
        Self {
            label: label.into(),
            coordinate,
        }
    }

    pub fn resolved(label: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self::new(label, Some(Coordinate::new(lat, lon)))
    }

    pub fn unresolved(label: impl Into<String>) -> Self {
        Self::new(label, None)
    }
}

/// Role a waypoint plays within one log sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WaypointRole {
    Current,
    Pickup,
    Dropoff,
}

/// The ordered stops of one log sheet: current location, pickup, optional dropoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogWaypoints {
    pub current: Waypoint,
    pub pickup: Waypoint,
    pub dropoff: Option<Waypoint>,
}

impl LogWaypoints {
    pub fn new(current: Waypoint, pickup: Waypoint, dropoff: Option<Waypoint>) -> Self {
        Self {
            current,
            pickup,
            dropoff,
        }
    }

    /// Waypoints in visiting order, tagged with their role.
    pub fn ordered(&self) -> Vec<(WaypointRole, &Waypoint)> {
        let mut ordered = vec![
            (WaypointRole::Current, &self.current),
            (WaypointRole::Pickup, &self.pickup),
        ];
        if let Some(dropoff) = &self.dropoff {
            ordered.push((WaypointRole::Dropoff, dropoff));
        }
        ordered
    }

    pub fn has_dropoff(&self) -> bool {
        self.dropoff.is_some()
    }
}

/// A routed leg between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub distance_km: f64,
    pub duration_hr: f64,
    pub path: Polyline,
}

impl RouteLeg {
    /// The leg a router reports when it could not route: no distance, no time, no path.
    pub fn unroutable(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
            distance_km: 0.0,
            duration_hr: 0.0,
            path: Polyline::new(Vec::new()),
        }
    }
}

/// Round to two decimals for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn serialize_rounded<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round2(*value))
}

pub(crate) fn serialize_rounded_vec<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter().map(|value| round2(*value)))
}
