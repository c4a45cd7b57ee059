//! Core seams of the path model.
//!
//! The geodesy math is supplied from outside; the path only caches and
//! rolls up what the provider reports. Hooks are notification points and
//! never feed anything back into the core.

use crate::geodesy::Coordinate;
use crate::list::PathList;
use crate::point::PathPoint;
use crate::{PathError, Result};

/// Distance and bearing primitives between coordinates.
///
/// Distances are in the provider's unit (metres for [`SphericalGeodesy`]),
/// bearings in degrees normalized to `[0, 360)`.
///
/// [`SphericalGeodesy`]: crate::geodesy::SphericalGeodesy
pub trait GeodesyProvider: Send + Sync {
    /// Great-circle distance.
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64;

    /// Bearing at `from` of the great-circle path towards `to`.
    fn initial_bearing(&self, from: Coordinate, to: Coordinate) -> f64;

    /// Bearing on arrival at `to` of the great-circle path from `from`.
    fn final_bearing(&self, from: Coordinate, to: Coordinate) -> f64;

    fn rhumb_distance(&self, from: Coordinate, to: Coordinate) -> f64;

    fn rhumb_bearing(&self, from: Coordinate, to: Coordinate) -> f64;

    /// Point at `fraction` (0..=1) of the great-circle path from `from` to `to`.
    fn intermediate_point(&self, from: Coordinate, to: Coordinate, fraction: f64) -> Coordinate;

    /// Point reached by following `bearing` along a rhumb line for `distance`.
    fn rhumb_destination(&self, origin: Coordinate, bearing: f64, distance: f64) -> Coordinate;

    /// Reject coordinates the provider cannot work with.
    fn validate(&self, coordinate: Coordinate) -> Result<()> {
        let Coordinate { latitude, longitude } = coordinate;
        let reason = if !latitude.is_finite() || !longitude.is_finite() {
            Some("non-finite value")
        } else if !(-90.0..=90.0).contains(&latitude) {
            Some("latitude outside [-90, 90]")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(PathError::InvalidCoordinate {
                latitude,
                longitude,
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Per-point notifications.
///
/// Both callbacks receive shared references only, so a hook can never
/// mutate the list that is notifying it.
pub trait PointHooks: Send + Sync {
    /// Called on every point once an update pass has finished.
    fn on_update(&self, _point: &PathPoint, _list: &PathList) {}

    /// Called right before a point is detached from its list.
    fn on_remove(&self, _point: &PathPoint) {}
}
