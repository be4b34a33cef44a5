//! Builders for trip and log-sheet records with sensible defaults.

use hos_planner::traits::{LogSheetRecord, TripRecord};

pub const DAY: i64 = 86_400;

/// 2026-03-02T00:00:00Z
pub const TRIP_START: i64 = 1_772_409_600;

#[derive(Clone, Debug)]
pub struct TestLogSheet {
    pub current_location: String,
    pub pickup: String,
    pub dropoff: Option<String>,
    pub created_date: i64,
}

impl TestLogSheet {
    pub fn new(current_location: &str, pickup: &str) -> Self {
        Self {
            current_location: current_location.to_string(),
            pickup: pickup.to_string(),
            dropoff: None,
            created_date: TRIP_START,
        }
    }

    pub fn dropoff(mut self, dropoff: &str) -> Self {
        self.dropoff = Some(dropoff.to_string());
        self
    }

    pub fn on_day(mut self, day: i64) -> Self {
        self.created_date = TRIP_START + day * DAY;
        self
    }
}

impl LogSheetRecord for TestLogSheet {
    fn current_location(&self) -> &str {
        &self.current_location
    }

    fn pickup(&self) -> &str {
        &self.pickup
    }

    fn dropoff(&self) -> Option<&str> {
        self.dropoff.as_deref()
    }

    fn created_date(&self) -> i64 {
        self.created_date
    }
}

#[derive(Clone, Debug)]
pub struct TestTrip {
    pub driver: Option<String>,
    pub pickup: String,
    pub dropoff: Option<String>,
    pub log_sheets: Vec<TestLogSheet>,
}

impl TestTrip {
    pub fn new(pickup: &str) -> Self {
        Self {
            driver: None,
            pickup: pickup.to_string(),
            dropoff: None,
            log_sheets: Vec::new(),
        }
    }

    pub fn dropoff(mut self, dropoff: &str) -> Self {
        self.dropoff = Some(dropoff.to_string());
        self
    }

    pub fn driver(mut self, driver: &str) -> Self {
        self.driver = Some(driver.to_string());
        self
    }

    pub fn sheet(mut self, sheet: TestLogSheet) -> Self {
        self.log_sheets.push(sheet);
        self
    }
}

impl TripRecord for TestTrip {
    type LogSheet = TestLogSheet;

    fn pickup(&self) -> &str {
        &self.pickup
    }

    fn dropoff(&self) -> Option<&str> {
        self.dropoff.as_deref()
    }

    fn driver(&self) -> Option<&str> {
        self.driver.as_deref()
    }

    fn log_sheets(&self) -> &[Self::LogSheet] {
        &self.log_sheets
    }
}
