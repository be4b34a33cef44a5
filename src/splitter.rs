//! Splits a routed leg at the continuous-driving limit.
//!
//! A leg over the limit is cut once: the first segment covers exactly the
//! limit, the remainder follows a rest break. Legs over twice the limit are
//! not split again.

use serde::Serialize;
use tracing::debug;

use crate::model::{Coordinate, RouteLeg};
use crate::polyline::Polyline;
use crate::rules::HosRules;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrivingSegment {
    pub distance_km: f64,
    pub duration_hr: f64,
    pub path: Polyline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SplitLeg {
    Single(DrivingSegment),
    Split {
        before: DrivingSegment,
        break_at: Coordinate,
        after: DrivingSegment,
    },
}

impl SplitLeg {
    pub fn segments(&self) -> Vec<&DrivingSegment> {
        match self {
            SplitLeg::Single(segment) => vec![segment],
            SplitLeg::Split { before, after, .. } => vec![before, after],
        }
    }

    pub fn rest_break(&self) -> Option<Coordinate> {
        match self {
            SplitLeg::Single(_) => None,
            SplitLeg::Split { break_at, .. } => Some(*break_at),
        }
    }
}

pub fn split(leg: &RouteLeg, rules: &HosRules) -> SplitLeg {
    let limit = rules.max_driving_hours;
    if leg.duration_hr <= limit {
        return SplitLeg::Single(DrivingSegment {
            distance_km: leg.distance_km,
            duration_hr: leg.duration_hr,
            path: leg.path.clone(),
        });
    }

    let fraction = limit / leg.duration_hr;
    let distance_before = leg.distance_km * fraction;
    let (path_before, path_after) = leg.path.split_at_fraction(fraction);
    let break_at = path_before.last().unwrap_or(leg.destination);

    debug!(
        duration_hr = leg.duration_hr,
        distance_km = leg.distance_km,
        fraction,
        "splitting leg at driving limit"
    );

    SplitLeg::Split {
        before: DrivingSegment {
            distance_km: distance_before,
            duration_hr: limit,
            path: path_before,
        },
        break_at,
        after: DrivingSegment {
            distance_km: leg.distance_km - distance_before,
            duration_hr: leg.duration_hr - limit,
            path: path_after,
        },
    }
}
