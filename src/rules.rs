//! Hours-of-service rule set.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HosRules {
    /// Continuous driving allowed before a rest break is forced (hours).
    pub max_driving_hours: f64,
    /// Length of the mandatory rest break (hours).
    pub rest_break_hours: f64,
    /// Time spent at the pickup stop (hours).
    pub pickup_hours: f64,
    /// Time spent at the dropoff stop (hours).
    pub dropoff_hours: f64,
    /// Time spent at each fueling stop (hours).
    pub fueling_hours: f64,
    /// Distance between fueling stops (km).
    pub fueling_interval_km: f64,
    /// Length of a log day (hours).
    pub daily_hours: f64,
    /// Duty window; a log sheet above this many cycle hours is flagged.
    pub driving_window_hours: f64,
    /// Cumulative cycle limit across a trip (hours).
    pub cycle_limit_hours: f64,
    /// Period the cycle limit applies to (days).
    pub cycle_limit_days: f64,
    /// Hours of the chart day shown as off-duty before the first instruction.
    pub day_start_hours: f64,
}

impl Default for HosRules {
    fn default() -> Self {
        Self {
            max_driving_hours: 10.0,
            rest_break_hours: 0.5,
            pickup_hours: 0.5,
            dropoff_hours: 0.5,
            fueling_hours: 0.5,
            fueling_interval_km: 1000.0,
            daily_hours: 24.0,
            driving_window_hours: 14.0,
            cycle_limit_hours: 70.0,
            cycle_limit_days: 8.0,
            day_start_hours: 6.5, // 06:30
        }
    }
}
