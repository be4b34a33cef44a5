//! Duty-status timeline for the 24-hour log chart.
//!
//! Positions are measured in half-hour units from 00:00. The generator only
//! produces the ordered polyline vertices; drawing is left to the caller.

use serde::Serialize;

use crate::instruction::Instruction;
use crate::rules::HosRules;

/// Chart rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// Row index on the chart.
    pub fn row(self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDuty => 3,
        }
    }
}

/// One polyline vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DutyChange {
    /// Elapsed half-hour units from 00:00. Fractional, since drive durations
    /// rarely land on a half-hour.
    pub half_hours: f64,
    pub status: DutyStatus,
}

impl DutyChange {
    /// Position snapped to the nearest whole half-hour unit of the chart grid.
    pub fn units(&self) -> u32 {
        self.half_hours.round().max(0.0) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyTimeline {
    /// Position of the log sheet this timeline was drawn from.
    pub log_sheet: usize,
    pub points: Vec<DutyChange>,
}

impl DutyTimeline {
    /// Hours the polyline spends on `status`.
    pub fn hours_in(&self, status: DutyStatus) -> f64 {
        self.points
            .windows(2)
            .filter(|pair| pair[0].status == status && pair[1].status == status)
            .map(|pair| (pair[1].half_hours - pair[0].half_hours) / 2.0)
            .sum()
    }

    pub fn end(&self) -> f64 {
        self.points.last().map(|point| point.half_hours).unwrap_or(0.0)
    }
}

pub fn timeline(log_sheet: usize, instructions: &[Instruction], rules: &HosRules) -> DutyTimeline {
    let day_end = rules.daily_hours * 2.0;
    let mut cursor = rules.day_start_hours * 2.0;
    let mut current = DutyStatus::OffDuty;
    let mut points = vec![
        DutyChange {
            half_hours: 0.0,
            status: DutyStatus::OffDuty,
        },
        DutyChange {
            half_hours: cursor,
            status: DutyStatus::OffDuty,
        },
    ];

    for instruction in instructions {
        let Some(status) = instruction.status() else {
            continue;
        };
        if status != current {
            points.push(DutyChange {
                half_hours: cursor,
                status,
            });
            current = status;
        }
        cursor += instruction.duration_hr() * 2.0;
        points.push(DutyChange {
            half_hours: cursor,
            status,
        });
    }

    if cursor < day_end {
        if current != DutyStatus::OffDuty {
            points.push(DutyChange {
                half_hours: cursor,
                status: DutyStatus::OffDuty,
            });
        }
        points.push(DutyChange {
            half_hours: day_end,
            status: DutyStatus::OffDuty,
        });
    }

    DutyTimeline { log_sheet, points }
}
