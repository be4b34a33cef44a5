//! hos-planner: hours-of-service trip segmentation and duty-status engine.
//!
//! Turns a log sheet's waypoints into a timed itinerary of drives, breaks and
//! stops, reduces it to duty-hour buckets with violation warnings, and lays it
//! out as a 24-hour duty chart timeline.

pub mod traits;
pub mod model;
pub mod polyline;
pub mod rules;
pub mod error;
pub mod instruction;
pub mod splitter;
pub mod itinerary;
pub mod duty;
pub mod timeline;
pub mod trip;
pub mod engine;
pub mod osrm;
pub mod osrm_data;
pub mod nominatim;
pub mod haversine;
