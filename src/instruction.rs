//! Itinerary events in execution order.

use std::fmt;

use serde::Serialize;

use crate::model::{Coordinate, serialize_rounded};
use crate::polyline::Polyline;
use crate::timeline::DutyStatus;

/// Label used for the inner end of a split leg.
pub const INTERMEDIATE_POINT: &str = "intermediate point";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InstructionKind {
    Start,
    Drive,
    PickupStop,
    DropoffStop,
    FuelingStop,
    RestBreak,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Instruction {
    Start {
        label: String,
        at: Option<Coordinate>,
    },
    Drive {
        from: String,
        to: String,
        #[serde(serialize_with = "serialize_rounded")]
        duration_hr: f64,
        #[serde(serialize_with = "serialize_rounded")]
        distance_km: f64,
        path: Polyline,
    },
    PickupStop {
        label: String,
        at: Coordinate,
        duration_hr: f64,
    },
    DropoffStop {
        label: String,
        at: Coordinate,
        duration_hr: f64,
    },
    FuelingStop {
        at: Coordinate,
        #[serde(serialize_with = "serialize_rounded")]
        distance_at_stop_km: f64,
        duration_hr: f64,
    },
    RestBreak {
        at: Coordinate,
        #[serde(serialize_with = "serialize_rounded")]
        driving_hours_at_break: f64,
        duration_hr: f64,
    },
}

impl Instruction {
    pub fn kind(&self) -> InstructionKind {
        match self {
            Instruction::Start { .. } => InstructionKind::Start,
            Instruction::Drive { .. } => InstructionKind::Drive,
            Instruction::PickupStop { .. } => InstructionKind::PickupStop,
            Instruction::DropoffStop { .. } => InstructionKind::DropoffStop,
            Instruction::FuelingStop { .. } => InstructionKind::FuelingStop,
            Instruction::RestBreak { .. } => InstructionKind::RestBreak,
        }
    }

    pub fn duration_hr(&self) -> f64 {
        match self {
            Instruction::Start { .. } => 0.0,
            Instruction::Drive { duration_hr, .. }
            | Instruction::PickupStop { duration_hr, .. }
            | Instruction::DropoffStop { duration_hr, .. }
            | Instruction::FuelingStop { duration_hr, .. }
            | Instruction::RestBreak { duration_hr, .. } => *duration_hr,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Instruction::Drive { distance_km, .. } => *distance_km,
            _ => 0.0,
        }
    }

    /// Chart row for this event; `Start` draws nothing.
    pub fn status(&self) -> Option<DutyStatus> {
        match self.kind() {
            InstructionKind::Start => None,
            InstructionKind::Drive => Some(DutyStatus::Driving),
            InstructionKind::PickupStop
            | InstructionKind::DropoffStop
            | InstructionKind::FuelingStop
            | InstructionKind::RestBreak => Some(DutyStatus::OnDuty),
        }
    }

    /// Where a point event happens.
    pub fn at(&self) -> Option<Coordinate> {
        match self {
            Instruction::Start { at, .. } => *at,
            Instruction::Drive { .. } => None,
            Instruction::PickupStop { at, .. }
            | Instruction::DropoffStop { at, .. }
            | Instruction::FuelingStop { at, .. }
            | Instruction::RestBreak { at, .. } => Some(*at),
        }
    }
}

fn minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

fn trimmed(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Start { label, .. } => write!(f, "Start at {}", label),
            Instruction::Drive {
                from,
                to,
                duration_hr,
                distance_km,
                ..
            } => write!(
                f,
                "Drive from {} to {} ({:.2} hrs, {:.2} km)",
                from, to, duration_hr, distance_km
            ),
            Instruction::PickupStop {
                label, duration_hr, ..
            } => write!(f, "Stop at {} for pickup ({} min)", label, minutes(*duration_hr)),
            Instruction::DropoffStop {
                label, duration_hr, ..
            } => write!(f, "Stop at {} for dropoff ({} min)", label, minutes(*duration_hr)),
            Instruction::FuelingStop {
                distance_at_stop_km,
                duration_hr,
                ..
            } => write!(
                f,
                "Fueling stop after {} km ({} min)",
                distance_at_stop_km.floor() as i64,
                minutes(*duration_hr)
            ),
            Instruction::RestBreak {
                driving_hours_at_break,
                duration_hr,
                ..
            } => write!(
                f,
                "Mandatory {}-min break after {} hrs of driving",
                minutes(*duration_hr),
                trimmed(*driving_hours_at_break)
            ),
        }
    }
}
