//! Test fixtures for latlng-path.
//!
//! Provides:
//! - Real Danish harbour / lighthouse positions
//! - A planar mock provider with exact, hand-checkable arithmetic
//! - Hooks that record what they were told

#![allow(dead_code)]

pub mod danish_waters;

pub use danish_waters::*;

use std::sync::Mutex;

use latlng_path::geodesy::Coordinate;
use latlng_path::list::PathList;
use latlng_path::point::PathPoint;
use latlng_path::traits::{GeodesyProvider, PointHooks};

/// Treats degrees as a flat plane: `x = lng`, `y = lat`.
///
/// Rhumb distances are scaled by `rhumb_factor` so the two metric families
/// can be told apart in assertions.
#[derive(Debug, Clone, Copy)]
pub struct PlanarGeodesy {
    pub rhumb_factor: f64,
}

impl Default for PlanarGeodesy {
    fn default() -> Self {
        Self { rhumb_factor: 2.0 }
    }
}

fn planar_bearing(from: Coordinate, to: Coordinate) -> f64 {
    let dx = to.longitude - from.longitude;
    let dy = to.latitude - from.latitude;
    dx.atan2(dy).to_degrees().rem_euclid(360.0)
}

impl GeodesyProvider for PlanarGeodesy {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        (to.longitude - from.longitude).hypot(to.latitude - from.latitude)
    }

    fn initial_bearing(&self, from: Coordinate, to: Coordinate) -> f64 {
        planar_bearing(from, to)
    }

    fn final_bearing(&self, from: Coordinate, to: Coordinate) -> f64 {
        planar_bearing(from, to)
    }

    fn rhumb_distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        self.distance(from, to) * self.rhumb_factor
    }

    fn rhumb_bearing(&self, from: Coordinate, to: Coordinate) -> f64 {
        planar_bearing(from, to)
    }

    fn intermediate_point(&self, from: Coordinate, to: Coordinate, fraction: f64) -> Coordinate {
        Coordinate::new(
            from.latitude + (to.latitude - from.latitude) * fraction,
            from.longitude + (to.longitude - from.longitude) * fraction,
        )
    }

    fn rhumb_destination(&self, origin: Coordinate, bearing: f64, distance: f64) -> Coordinate {
        let planar = distance / self.rhumb_factor;
        let radians = bearing.to_radians();
        Coordinate::new(
            origin.latitude + planar * radians.cos(),
            origin.longitude + planar * radians.sin(),
        )
    }
}

/// Something a [`RecordingHooks`] was notified about.
#[derive(Debug, Clone, PartialEq)]
pub enum HookEvent {
    Updated { index: usize, list_len: usize },
    Removed { latitude: f64, longitude: f64 },
}

/// Hooks that append every notification to a shared log.
#[derive(Debug, Default)]
pub struct RecordingHooks {
    pub events: Mutex<Vec<HookEvent>>,
}

impl RecordingHooks {
    pub fn events(&self) -> Vec<HookEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    fn push(&self, event: HookEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl PointHooks for RecordingHooks {
    fn on_update(&self, point: &PathPoint, list: &PathList) {
        self.push(HookEvent::Updated {
            index: point.index(),
            list_len: list.len(),
        });
    }

    fn on_remove(&self, point: &PathPoint) {
        self.push(HookEvent::Removed {
            latitude: point.latitude(),
            longitude: point.longitude(),
        });
    }
}

/// Open planar path built from `(lat, lng)` tuples.
pub fn planar_path(points: &[(f64, f64)]) -> PathList {
    PathList::builder()
        .geodesy(PlanarGeodesy::default())
        .build(points.iter().copied())
        .expect("planar path")
}

/// Closed planar path built from `(lat, lng)` tuples.
pub fn planar_polygon(points: &[(f64, f64)]) -> PathList {
    PathList::builder()
        .geodesy(PlanarGeodesy::default())
        .polygon(true)
        .build(points.iter().copied())
        .expect("planar polygon")
}
