//! Builds the ordered stop/drive instruction sequence for one log sheet.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::instruction::{INTERMEDIATE_POINT, Instruction};
use crate::model::{Coordinate, LogWaypoints, RouteLeg, Waypoint, WaypointRole};
use crate::rules::HosRules;
use crate::splitter::{SplitLeg, split};
use crate::traits::Router;

#[derive(Debug, Clone, Copy)]
struct Stop<'a> {
    role: WaypointRole,
    waypoint: &'a Waypoint,
    coordinate: Coordinate,
}

/// Running totals across the whole log sheet.
#[derive(Debug, Default)]
struct Progress {
    driving_hours: f64,
    distance_km: f64,
}

/// Routes every consecutive pair of resolved waypoints and lays out the
/// resulting drives, breaks and stops in execution order.
///
/// Unresolved waypoints are skipped; the legs are routed concurrently but
/// consumed in waypoint order.
pub fn build<R>(waypoints: &LogWaypoints, router: &R, rules: &HosRules) -> Vec<Instruction>
where
    R: Router + Sync + ?Sized,
{
    let mut instructions = vec![Instruction::Start {
        label: waypoints.current.label.clone(),
        at: waypoints.current.coordinate,
    }];

    let stops: Vec<Stop<'_>> = waypoints
        .ordered()
        .into_iter()
        .filter_map(|(role, waypoint)| match waypoint.coordinate {
            Some(coordinate) => Some(Stop {
                role,
                waypoint,
                coordinate,
            }),
            None => {
                warn!(label = %waypoint.label, ?role, "skipping unresolved waypoint");
                None
            }
        })
        .collect();

    let pairs: Vec<(Stop<'_>, Stop<'_>)> = stops.windows(2).map(|pair| (pair[0], pair[1])).collect();
    let legs: Vec<RouteLeg> = pairs
        .par_iter()
        .map(|(from, to)| router.route(from.coordinate, to.coordinate))
        .collect();

    let mut progress = Progress::default();
    for ((from, to), leg) in pairs.iter().zip(legs) {
        let km_before_leg = progress.distance_km;
        push_drives(&mut instructions, &mut progress, from, to, &leg, rules);
        push_arrival(&mut instructions, to, rules);
        push_fueling(&mut instructions, km_before_leg, &progress, &leg, rules);
    }

    instructions
}

fn push_drives(
    instructions: &mut Vec<Instruction>,
    progress: &mut Progress,
    from: &Stop<'_>,
    to: &Stop<'_>,
    leg: &RouteLeg,
    rules: &HosRules,
) {
    match split(leg, rules) {
        SplitLeg::Single(segment) => {
            progress.driving_hours += segment.duration_hr;
            progress.distance_km += segment.distance_km;
            instructions.push(Instruction::Drive {
                from: from.waypoint.label.clone(),
                to: to.waypoint.label.clone(),
                duration_hr: segment.duration_hr,
                distance_km: segment.distance_km,
                path: segment.path,
            });
        }
        SplitLeg::Split {
            before,
            break_at,
            after,
        } => {
            progress.driving_hours += before.duration_hr;
            progress.distance_km += before.distance_km;
            instructions.push(Instruction::Drive {
                from: from.waypoint.label.clone(),
                to: INTERMEDIATE_POINT.to_string(),
                duration_hr: before.duration_hr,
                distance_km: before.distance_km,
                path: before.path,
            });
            instructions.push(Instruction::RestBreak {
                at: break_at,
                driving_hours_at_break: progress.driving_hours,
                duration_hr: rules.rest_break_hours,
            });

            progress.driving_hours += after.duration_hr;
            progress.distance_km += after.distance_km;
            instructions.push(Instruction::Drive {
                from: INTERMEDIATE_POINT.to_string(),
                to: to.waypoint.label.clone(),
                duration_hr: after.duration_hr,
                distance_km: after.distance_km,
                path: after.path,
            });
        }
    }
}

fn push_arrival(instructions: &mut Vec<Instruction>, to: &Stop<'_>, rules: &HosRules) {
    let label = to.waypoint.label.clone();
    match to.role {
        WaypointRole::Pickup => instructions.push(Instruction::PickupStop {
            label,
            at: to.coordinate,
            duration_hr: rules.pickup_hours,
        }),
        WaypointRole::Dropoff => instructions.push(Instruction::DropoffStop {
            label,
            at: to.coordinate,
            duration_hr: rules.dropoff_hours,
        }),
        WaypointRole::Current => {}
    }
}

/// At most one fueling stop per leg, placed where the leg crossed the last
/// fueling-interval boundary.
///
/// A leg that starts exactly on a boundary did not cross it; the previous leg
/// already fueled there.
fn push_fueling(
    instructions: &mut Vec<Instruction>,
    km_before_leg: f64,
    progress: &Progress,
    leg: &RouteLeg,
    rules: &HosRules,
) {
    let interval = rules.fueling_interval_km;
    if leg.distance_km <= 0.0 || interval <= 0.0 {
        return;
    }

    let crossed = (progress.distance_km / interval).floor() > (km_before_leg / interval).floor();
    if !crossed {
        return;
    }

    let past_boundary = progress.distance_km % interval;

    let fraction = (leg.distance_km - past_boundary) / leg.distance_km;
    let at = leg.path.point_at_fraction(fraction).unwrap_or(leg.destination);
    debug!(
        cumulative_km = progress.distance_km,
        fraction, "inserting fueling stop"
    );
    instructions.push(Instruction::FuelingStop {
        at,
        distance_at_stop_km: progress.distance_km,
        duration_hr: rules.fueling_hours,
    });
}
