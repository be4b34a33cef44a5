//! Reduces a log sheet's instructions to duty-hour buckets and warnings.

use serde::Serialize;
use tracing::warn;

use crate::instruction::{Instruction, InstructionKind};
use crate::model::{Coordinate, LogWaypoints, serialize_rounded, serialize_rounded_vec};
use crate::polyline::Polyline;
use crate::rules::HosRules;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelingStop {
    pub at: Coordinate,
    #[serde(serialize_with = "serialize_rounded")]
    pub distance_at_stop_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestBreakStop {
    pub at: Coordinate,
    #[serde(serialize_with = "serialize_rounded")]
    pub driving_hours_at_break: f64,
}

/// Everything derived for one log sheet.
///
/// Hour and distance fields hold unrounded values; they are rounded to two
/// decimals only when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogSheetComputation {
    pub waypoints: LogWaypoints,
    #[serde(serialize_with = "serialize_rounded")]
    pub total_distance_km: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub cycle_hours: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub driving_hours: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub on_duty_hours: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub off_duty_hours: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub sleeper_berth_hours: f64,
    pub warnings: Vec<String>,
    /// False when a warning excludes this sheet from the duty chart.
    pub charted: bool,
    pub instructions: Vec<Instruction>,
    pub stop_instructions: Vec<String>,
    #[serde(serialize_with = "serialize_rounded_vec")]
    pub segment_durations: Vec<f64>,
    #[serde(serialize_with = "serialize_rounded_vec")]
    pub segment_distances: Vec<f64>,
    pub fueling_stops: Vec<FuelingStop>,
    pub rest_break_stops: Vec<RestBreakStop>,
}

impl LogSheetComputation {
    /// Paths of each driving segment, in driving order.
    pub fn route_paths(&self) -> Vec<&Polyline> {
        self.instructions
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::Drive { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }
}

pub fn aggregate(
    waypoints: &LogWaypoints,
    instructions: Vec<Instruction>,
    rules: &HosRules,
) -> LogSheetComputation {
    let drives: Vec<&Instruction> = instructions
        .iter()
        .filter(|instruction| instruction.kind() == InstructionKind::Drive)
        .collect();
    let segment_durations: Vec<f64> = drives.iter().map(|drive| drive.duration_hr()).collect();
    let segment_distances: Vec<f64> = drives.iter().map(|drive| drive.distance_km()).collect();

    let mut fueling_stops = Vec::new();
    let mut rest_break_stops = Vec::new();
    for instruction in &instructions {
        match instruction {
            Instruction::FuelingStop {
                at,
                distance_at_stop_km,
                ..
            } => fueling_stops.push(FuelingStop {
                at: *at,
                distance_at_stop_km: *distance_at_stop_km,
            }),
            Instruction::RestBreak {
                at,
                driving_hours_at_break,
                ..
            } => rest_break_stops.push(RestBreakStop {
                at: *at,
                driving_hours_at_break: *driving_hours_at_break,
            }),
            _ => {}
        }
    }

    let driving_hours: f64 = segment_durations.iter().sum();
    let total_distance_km: f64 = segment_distances.iter().sum();

    // Pickup is always charged, dropoff whenever the sheet names one, and the
    // rest break once if any leg had to be split.
    let mut on_duty_hours = rules.pickup_hours;
    if waypoints.has_dropoff() {
        on_duty_hours += rules.dropoff_hours;
    }
    on_duty_hours += fueling_stops.len() as f64 * rules.fueling_hours;
    if !rest_break_stops.is_empty() {
        on_duty_hours += rules.rest_break_hours;
    }

    let cycle_hours = driving_hours + on_duty_hours;
    let off_duty_hours = if cycle_hours <= rules.daily_hours {
        rules.daily_hours - cycle_hours
    } else {
        0.0
    };

    let mut warnings = Vec::new();
    if cycle_hours > rules.driving_window_hours {
        warn!(
            cycle_hours,
            window = rules.driving_window_hours,
            pickup = %waypoints.pickup.label,
            "driving window exceeded"
        );
        warnings.push(format!(
            "{}-Hour Driving Window exceeded ({:.2} hrs) - Related ELD logs are omitted",
            rules.driving_window_hours, cycle_hours
        ));
    }

    LogSheetComputation {
        waypoints: waypoints.clone(),
        total_distance_km,
        cycle_hours,
        driving_hours,
        on_duty_hours,
        off_duty_hours,
        sleeper_berth_hours: 0.0,
        charted: warnings.is_empty(),
        warnings,
        stop_instructions: instructions.iter().map(ToString::to_string).collect(),
        instructions,
        segment_durations,
        segment_distances,
        fueling_stops,
        rest_break_stops,
    }
}
