//! Freight hubs along the I-80 / I-70 / I-10 corridors.
//!
//! Coordinates sourced from OpenStreetMap city nodes.

use hos_planner::model::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

pub const CHICAGO: Location = Location::new("Chicago, IL", 41.8755616, -87.6244212);
pub const GARY: Location = Location::new("Gary, IN", 41.6020962, -87.3371639);
pub const DES_MOINES: Location = Location::new("Des Moines, IA", 41.5910323, -93.6046655);
pub const OMAHA: Location = Location::new("Omaha, NE", 41.2587459, -95.9383758);
pub const DENVER: Location = Location::new("Denver, CO", 39.7392364, -104.984862);
pub const KANSAS_CITY: Location = Location::new("Kansas City, MO", 39.100105, -94.5781416);
pub const ST_LOUIS: Location = Location::new("St. Louis, MO", 38.6280278, -90.1910154);
pub const INDIANAPOLIS: Location = Location::new("Indianapolis, IN", 39.7683331, -86.1583502);
pub const HOUSTON: Location = Location::new("Houston, TX", 29.7589382, -95.3676974);
pub const SAN_ANTONIO: Location = Location::new("San Antonio, TX", 29.4246002, -98.4951405);
pub const EL_PASO: Location = Location::new("El Paso, TX", 31.7601164, -106.4870404);
pub const PHOENIX: Location = Location::new("Phoenix, AZ", 33.4484367, -112.074141);
pub const LOS_ANGELES: Location = Location::new("Los Angeles, CA", 34.0536909, -118.242766);

pub const ALL: &[Location] = &[
    CHICAGO,
    GARY,
    DES_MOINES,
    OMAHA,
    DENVER,
    KANSAS_CITY,
    ST_LOUIS,
    INDIANAPOLIS,
    HOUSTON,
    SAN_ANTONIO,
    EL_PASO,
    PHOENIX,
    LOS_ANGELES,
];
