//! Trip computation entry point.
//!
//! Geocoding and routing fan out across rayon; every result is collected back
//! in log-sheet and waypoint order before it is consumed.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::duty::{LogSheetComputation, aggregate};
use crate::itinerary::build;
use crate::model::{Coordinate, LogWaypoints, Waypoint};
use crate::rules::HosRules;
use crate::timeline::{DutyTimeline, timeline};
use crate::traits::{Geocoder, LogSheetRecord, Router, TripRecord};
use crate::trip::{TripComputation, aggregate_trip};

/// Chart header label when the trip names no driver.
pub const UNKNOWN_DRIVER: &str = "Unknown Driver";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    /// Driver label for the chart header.
    pub driver: String,
    /// Trip-level pickup marker.
    pub pickup: Option<Coordinate>,
    /// Trip-level dropoff marker.
    pub dropoff: Option<Coordinate>,
    pub log_sheets: Vec<LogSheetComputation>,
    /// Timelines for charted log sheets only.
    pub timelines: Vec<DutyTimeline>,
    pub trip: TripComputation,
}

impl TripReport {
    /// True when no waypoint on any log sheet could be geocoded.
    pub fn nothing_resolved(&self) -> bool {
        self.log_sheets.iter().all(|sheet| {
            sheet
                .waypoints
                .ordered()
                .iter()
                .all(|(_, waypoint)| waypoint.coordinate.is_none())
        })
    }
}

fn non_blank(label: &str) -> Option<&str> {
    if label.trim().is_empty() { None } else { Some(label) }
}

fn locate<G>(geocoder: &G, label: &str) -> Waypoint
where
    G: Geocoder + Sync + ?Sized,
{
    let coordinate = non_blank(label).and_then(|query| geocoder.geocode(query));
    if coordinate.is_none() {
        warn!(label, "location did not resolve");
    }
    Waypoint::new(label, coordinate)
}

/// Geocodes a log sheet's current location, pickup and dropoff concurrently.
pub fn resolve_waypoints<L, G>(sheet: &L, geocoder: &G) -> LogWaypoints
where
    L: LogSheetRecord + Sync,
    G: Geocoder + Sync + ?Sized,
{
    let ((current, pickup), dropoff) = rayon::join(
        || {
            rayon::join(
                || locate(geocoder, sheet.current_location()),
                || locate(geocoder, sheet.pickup()),
            )
        },
        || sheet.dropoff().and_then(non_blank).map(|label| locate(geocoder, label)),
    );
    LogWaypoints::new(current, pickup, dropoff)
}

/// Builds and aggregates one log sheet from already resolved waypoints.
pub fn compute_log_sheet<R>(
    waypoints: &LogWaypoints,
    router: &R,
    rules: &HosRules,
) -> LogSheetComputation
where
    R: Router + Sync + ?Sized,
{
    let instructions = build(waypoints, router, rules);
    aggregate(waypoints, instructions, rules)
}

pub fn compute_trip<T, G, R>(trip: &T, geocoder: &G, router: &R, rules: &HosRules) -> TripReport
where
    T: TripRecord + Sync,
    T::LogSheet: Sync,
    G: Geocoder + Sync + ?Sized,
    R: Router + Sync + ?Sized,
{
    let records = trip.log_sheets();
    let driver = trip
        .driver()
        .and_then(non_blank)
        .unwrap_or(UNKNOWN_DRIVER)
        .to_string();
    info!(log_sheets = records.len(), %driver, "computing trip");

    let ((pickup, dropoff), log_sheets) = rayon::join(
        || {
            rayon::join(
                || non_blank(trip.pickup()).and_then(|label| geocoder.geocode(label)),
                || trip.dropoff().and_then(non_blank).and_then(|label| geocoder.geocode(label)),
            )
        },
        || {
            records
                .par_iter()
                .map(|record| {
                    let waypoints = resolve_waypoints(record, geocoder);
                    compute_log_sheet(&waypoints, router, rules)
                })
                .collect::<Vec<_>>()
        },
    );

    let timelines = log_sheets
        .iter()
        .enumerate()
        .filter(|(_, sheet)| sheet.charted)
        .map(|(index, sheet)| timeline(index, &sheet.instructions, rules))
        .collect();

    let created_dates: Vec<i64> = records.iter().map(|record| record.created_date()).collect();
    let totals = aggregate_trip(&log_sheets, &created_dates, rules);

    info!(
        total_cycle_hours = totals.total_cycle_hours,
        hos_violation = totals.hos_violation,
        "trip computed"
    );

    TripReport {
        driver,
        pickup,
        dropoff,
        log_sheets,
        timelines,
        trip: totals,
    }
}
