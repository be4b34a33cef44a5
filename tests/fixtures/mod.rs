//! Test fixtures for hos-planner.
//!
//! Provides:
//! - Real freight-corridor city locations (from OpenStreetMap)
//! - Table-driven fake geocoder and router
//! - Builders for trip and log-sheet records

#![allow(dead_code)]

pub mod fakes;
pub mod interstate_locations;
pub mod records;

pub use fakes::*;
pub use interstate_locations::*;
pub use records::*;
