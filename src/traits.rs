//! Seams between the engine and the outside world.
//!
//! Geocoding and routing are injected so the engine can run against real
//! services or deterministic fakes. Trip and log-sheet records are read
//! through traits so callers keep their own persistence models.

use crate::model::{Coordinate, RouteLeg};

/// Resolves free-text locations.
///
/// Returns `None` both when nothing matches and when the service fails.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Option<Coordinate>;
}

/// Routes between two resolved coordinates.
///
/// On failure, implementations return `RouteLeg::unroutable` instead of an error.
pub trait Router {
    fn route(&self, from: Coordinate, to: Coordinate) -> RouteLeg;
}

/// A stored log sheet: one day's current location, pickup and optional dropoff.
pub trait LogSheetRecord {
    fn current_location(&self) -> &str;

    fn pickup(&self) -> &str;

    fn dropoff(&self) -> Option<&str>;

    /// Creation timestamp (unix seconds).
    fn created_date(&self) -> i64;
}

/// A stored trip with its log sheets in display order.
pub trait TripRecord {
    type LogSheet: LogSheetRecord;

    fn pickup(&self) -> &str;

    fn dropoff(&self) -> Option<&str>;

    /// Name printed in the duty chart header.
    fn driver(&self) -> Option<&str> {
        None
    }

    fn log_sheets(&self) -> &[Self::LogSheet];
}
