//! Coordinates, edge metrics and the default spherical geodesy provider.
//!
//! `SphericalGeodesy` models the Earth as a sphere of mean radius and
//! delegates the math to the `geo` crate: great-circle metrics come from
//! `Haversine`, rhumb-line metrics from `Rhumb`.

use geo::{Bearing, Destination, Distance, Haversine, InterpolatePoint, Point, Rhumb};
use serde::{Deserialize, Serialize};

use crate::traits::GeodesyProvider;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Build from a `(lat, lng)` tuple.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}

// geo points are (x = lng, y = lat)
impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

/// Cached metrics of the directed edge between a point and its successor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeMetrics {
    pub distance: f64,
    pub bearing: f64,
    pub final_bearing: f64,
    pub rhumb_distance: f64,
    pub rhumb_bearing: f64,
    pub final_rhumb_bearing: f64,
}

impl EdgeMetrics {
    /// Compute the metrics of the edge `from -> to`.
    pub fn between<G: GeodesyProvider + ?Sized>(from: Coordinate, to: Coordinate, geodesy: &G) -> Self {
        let rhumb_bearing = geodesy.rhumb_bearing(from, to);
        Self {
            distance: geodesy.distance(from, to),
            bearing: geodesy.initial_bearing(from, to),
            final_bearing: geodesy.final_bearing(from, to),
            rhumb_distance: geodesy.rhumb_distance(from, to),
            rhumb_bearing,
            // A rhumb line keeps its bearing.
            final_rhumb_bearing: rhumb_bearing,
        }
    }

    /// Edge length in the selected metric family.
    #[inline]
    pub fn length(&self, rhumb: bool) -> f64 {
        if rhumb { self.rhumb_distance } else { self.distance }
    }

    /// Departure bearing in the selected metric family.
    #[inline]
    pub fn heading(&self, rhumb: bool) -> f64 {
        if rhumb { self.rhumb_bearing } else { self.bearing }
    }
}

/// Spherical-earth provider backed by `geo`.
///
/// Distances are in metres.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalGeodesy;

impl SphericalGeodesy {
    pub fn new() -> Self {
        Self
    }
}

fn normalize_bearing(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}

impl GeodesyProvider for SphericalGeodesy {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        Haversine.distance(Point::from(from), Point::from(to))
    }

    fn initial_bearing(&self, from: Coordinate, to: Coordinate) -> f64 {
        normalize_bearing(Haversine.bearing(Point::from(from), Point::from(to)))
    }

    fn final_bearing(&self, from: Coordinate, to: Coordinate) -> f64 {
        normalize_bearing(Haversine.bearing(Point::from(to), Point::from(from)) + 180.0)
    }

    fn rhumb_distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        Rhumb.distance(Point::from(from), Point::from(to))
    }

    fn rhumb_bearing(&self, from: Coordinate, to: Coordinate) -> f64 {
        normalize_bearing(Rhumb.bearing(Point::from(from), Point::from(to)))
    }

    fn intermediate_point(&self, from: Coordinate, to: Coordinate, fraction: f64) -> Coordinate {
        Haversine
            .point_at_ratio_between(Point::from(from), Point::from(to), fraction)
            .into()
    }

    fn rhumb_destination(&self, origin: Coordinate, bearing: f64, distance: f64) -> Coordinate {
        Rhumb.destination(Point::from(origin), bearing, distance).into()
    }
}
