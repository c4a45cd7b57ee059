//! Plain coordinate sequences.
//!
//! A `Polyline` is the serializable, metric-free form of a path: what a
//! caller stores or ships over the wire, and what a [`PathList`] is seeded
//! from or exported to.
//!
//! [`PathList`]: crate::list::PathList

use serde::{Deserialize, Serialize};

use crate::geodesy::Coordinate;

/// An ordered list of coordinates without cached metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
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
}

impl FromIterator<Coordinate> for Polyline {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<(f64, f64)>> for Polyline {
    /// Build from `(lat, lng)` tuples.
    fn from(points: Vec<(f64, f64)>) -> Self {
        points.into_iter().map(Coordinate::from).collect()
    }
}
