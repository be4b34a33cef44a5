//! Realistic trips along real freight corridors.
//!
//! Uses the haversine fallback router so the full pipeline runs offline
//! against real-world coordinates and multi-day distances.

mod fixtures;

use hos_planner::engine::{compute_log_sheet, compute_trip, resolve_waypoints};
use hos_planner::haversine::{HaversineRouter, haversine_km};
use hos_planner::instruction::{Instruction, InstructionKind};
use hos_planner::rules::HosRules;
use hos_planner::timeline::DutyStatus;

use fixtures::interstate_locations::{self, Location};
use fixtures::{TableGeocoder, TestLogSheet, TestTrip};

// ============================================================================
// Test Infrastructure
// ============================================================================

fn corridor_geocoder() -> TableGeocoder {
    TableGeocoder::new().with_locations(interstate_locations::ALL)
}

fn sheet(current: &Location, pickup: &Location, dropoff: Option<&Location>) -> TestLogSheet {
    let sheet = TestLogSheet::new(current.name, pickup.name);
    match dropoff {
        Some(dropoff) => sheet.dropoff(dropoff.name),
        None => sheet,
    }
}

fn corridor_trip() -> TestTrip {
    use interstate_locations::*;
    TestTrip::new(DES_MOINES.name)
        .dropoff(DENVER.name)
        .sheet(sheet(&CHICAGO, &GARY, Some(&INDIANAPOLIS)).on_day(0))
        .sheet(sheet(&INDIANAPOLIS, &ST_LOUIS, Some(&KANSAS_CITY)).on_day(1))
        .sheet(sheet(&KANSAS_CITY, &OMAHA, Some(&DES_MOINES)).on_day(2))
        .sheet(sheet(&HOUSTON, &SAN_ANTONIO, None).on_day(3))
        .sheet(sheet(&EL_PASO, &PHOENIX, Some(&LOS_ANGELES)).on_day(4))
        .sheet(sheet(&CHICAGO, &DENVER, Some(&LOS_ANGELES)).on_day(5))
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn duty_buckets_hold_for_every_corridor_sheet() {
    let report = compute_trip(
        &corridor_trip(),
        &corridor_geocoder(),
        &HaversineRouter::default(),
        &HosRules::default(),
    );

    assert_eq!(report.log_sheets.len(), 6);
    for sheet in &report.log_sheets {
        assert!((sheet.driving_hours + sheet.on_duty_hours - sheet.cycle_hours).abs() < 1e-9);
        assert!((sheet.off_duty_hours - (24.0 - sheet.cycle_hours).max(0.0)).abs() < 1e-9);
        assert!(sheet.total_distance_km >= 0.0);
        assert_eq!(sheet.sleeper_berth_hours, 0.0);
        assert_eq!(sheet.charted, sheet.warnings.is_empty());
        assert_eq!(sheet.charted, sheet.cycle_hours <= 14.0);
    }
}

#[test]
fn split_segments_add_back_up_to_the_leg() {
    use interstate_locations::*;
    let router = HaversineRouter::default();
    let rules = HosRules::default();
    let waypoints = resolve_waypoints(&sheet(&CHICAGO, &DENVER, None), &corridor_geocoder());
    let result = compute_log_sheet(&waypoints, &router, &rules);

    let expected_km = haversine_km(CHICAGO.coordinate(), DENVER.coordinate()) * router.road_factor;
    let expected_hr = expected_km / router.speed_kmh;
    assert!(expected_hr > 20.0, "corridor should exceed two driving limits");

    assert_eq!(result.segment_durations.len(), 2);
    assert_eq!(result.segment_durations[0], 10.0);
    let total_hr: f64 = result.segment_durations.iter().sum();
    let total_km: f64 = result.segment_distances.iter().sum();
    assert!((total_hr - expected_hr).abs() < 1e-6);
    assert!((total_km - expected_km).abs() < 1e-6);

    // Only one split per leg: the remainder still exceeds the limit.
    assert!(result.segment_durations[1] > 10.0);
    assert_eq!(result.rest_break_stops.len(), 1);
    assert_eq!(result.fueling_stops.len(), 1);
    assert!(!result.charted);
}

#[test]
fn every_leg_ends_with_its_arrival_stop() {
    let report = compute_trip(
        &corridor_trip(),
        &corridor_geocoder(),
        &HaversineRouter::default(),
        &HosRules::default(),
    );

    for sheet in &report.log_sheets {
        let kinds: Vec<InstructionKind> = sheet.instructions.iter().map(Instruction::kind).collect();
        assert_eq!(kinds[0], InstructionKind::Start);

        let pickup_at = kinds.iter().position(|kind| *kind == InstructionKind::PickupStop);
        let pickup_at = pickup_at.expect("every resolved sheet stops for pickup");
        assert_eq!(kinds[pickup_at - 1], InstructionKind::Drive);

        if sheet.waypoints.dropoff.is_some() {
            let dropoff_at = kinds
                .iter()
                .position(|kind| *kind == InstructionKind::DropoffStop)
                .expect("dropoff stop");
            assert!(dropoff_at > pickup_at);
        }

        for (index, kind) in kinds.iter().enumerate() {
            if *kind == InstructionKind::RestBreak {
                assert_eq!(kinds[index - 1], InstructionKind::Drive);
                assert_eq!(kinds[index + 1], InstructionKind::Drive);
            }
        }
    }
}

#[test]
fn fueling_follows_cumulative_distance_within_a_sheet() {
    let report = compute_trip(
        &corridor_trip(),
        &corridor_geocoder(),
        &HaversineRouter::default(),
        &HosRules::default(),
    );

    for sheet in &report.log_sheets {
        let legs = sheet.waypoints.ordered().len() - 1;
        assert!(sheet.fueling_stops.len() <= legs);
        if sheet.total_distance_km < 1000.0 {
            assert!(sheet.fueling_stops.is_empty());
        }
        for stop in &sheet.fueling_stops {
            assert!(stop.distance_at_stop_km >= 1000.0);
            assert!(stop.distance_at_stop_km <= sheet.total_distance_km + 1e-6);
        }
    }
}

#[test]
fn charted_timelines_span_the_whole_day() {
    let report = compute_trip(
        &corridor_trip(),
        &corridor_geocoder(),
        &HaversineRouter::default(),
        &HosRules::default(),
    );

    assert!(!report.timelines.is_empty());
    for timeline in &report.timelines {
        let sheet = &report.log_sheets[timeline.log_sheet];
        assert!(sheet.charted);
        assert_eq!(timeline.end(), 48.0);
        let total: f64 = [
            DutyStatus::OffDuty,
            DutyStatus::SleeperBerth,
            DutyStatus::Driving,
            DutyStatus::OnDuty,
        ]
        .iter()
        .map(|status| timeline.hours_in(*status))
        .sum();
        assert!((total - 24.0).abs() < 1e-9);
        assert!((timeline.hours_in(DutyStatus::Driving) - sheet.driving_hours).abs() < 1e-9);
    }
}

#[test]
fn trip_totals_include_uncharted_sheets() {
    let report = compute_trip(
        &corridor_trip(),
        &corridor_geocoder(),
        &HaversineRouter::default(),
        &HosRules::default(),
    );

    let summed: f64 = report.log_sheets.iter().map(|sheet| sheet.cycle_hours).sum();
    assert!((report.trip.total_cycle_hours - summed).abs() < 1e-9);
    assert_eq!(report.trip.day_span, 5.0);
    assert_eq!(report.trip.hos_violation, summed > 70.0);
    assert_eq!(report.pickup, Some(interstate_locations::DES_MOINES.coordinate()));
    assert_eq!(report.dropoff, Some(interstate_locations::DENVER.coordinate()));
}
