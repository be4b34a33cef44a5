//! Trip-level totals and the cycle-limit check.

use serde::Serialize;
use tracing::warn;

use crate::duty::LogSheetComputation;
use crate::model::serialize_rounded;
use crate::rules::HosRules;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripComputation {
    #[serde(serialize_with = "serialize_rounded")]
    pub total_cycle_hours: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub total_distance_km: f64,
    /// Days between the first and last log sheet.
    pub day_span: f64,
    pub hos_violation: bool,
    pub warning: Option<String>,
}

/// Span in days between the earliest and latest timestamp (unix seconds).
pub fn day_span(created_dates: &[i64]) -> f64 {
    match (created_dates.iter().min(), created_dates.iter().max()) {
        (Some(first), Some(last)) => (last - first) as f64 / SECONDS_PER_DAY,
        _ => 0.0,
    }
}

/// Sheets excluded from the chart still count toward the cycle.
pub fn aggregate_trip(
    log_sheets: &[LogSheetComputation],
    created_dates: &[i64],
    rules: &HosRules,
) -> TripComputation {
    let total_cycle_hours: f64 = log_sheets.iter().map(|sheet| sheet.cycle_hours).sum();
    let total_distance_km: f64 = log_sheets.iter().map(|sheet| sheet.total_distance_km).sum();
    let span = day_span(created_dates);
    check_cycle(total_cycle_hours, total_distance_km, span, rules)
}

fn check_cycle(
    total_cycle_hours: f64,
    total_distance_km: f64,
    day_span: f64,
    rules: &HosRules,
) -> TripComputation {
    let hos_violation =
        total_cycle_hours > rules.cycle_limit_hours && day_span <= rules.cycle_limit_days;
    let warning = hos_violation.then(|| {
        warn!(total_cycle_hours, day_span, "cycle limit exceeded");
        format!(
            "Total cycle hours ({:.2} hrs) exceed {}-hour limit within {} days!",
            total_cycle_hours, rules.cycle_limit_hours, rules.cycle_limit_days
        )
    });

    TripComputation {
        total_cycle_hours,
        total_distance_km,
        day_span,
        hos_violation,
        warning,
    }
}
