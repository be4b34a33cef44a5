//! Polyline representation for route geometries.
//!
//! Routers hand back decoded coordinate sequences; the splitter and the
//! fueling-stop placement slice and sample them by fraction of the leg.

use serde::{Deserialize, Serialize};

use crate::model::Coordinate;

/// A route geometry as an ordered sequence of decoded coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    /// Index at `floor(len * fraction)`, clamped to `0..=len`.
    fn index_at(&self, fraction: f64) -> usize {
        let raw = (self.points.len() as f64 * fraction).floor();
        if raw.is_nan() || raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.points.len())
        }
    }

    /// Splits into `[0, k)` and `[k, len)` where `k = floor(len * fraction)`.
    pub fn split_at_fraction(&self, fraction: f64) -> (Polyline, Polyline) {
        let index = self.index_at(fraction);
        let (head, tail) = self.points.split_at(index);
        (Polyline::new(head.to_vec()), Polyline::new(tail.to_vec()))
    }

    /// The point `fraction` of the way along the sequence, by index.
    pub fn point_at_fraction(&self, fraction: f64) -> Option<Coordinate> {
        if self.points.is_empty() {
            return None;
        }
        let index = self.index_at(fraction).min(self.points.len() - 1);
        Some(self.points[index])
    }
}
