//! Path nodes.
//!
//! A `PathPoint` is owned by exactly one `PathList`. Its neighbours are
//! stored as positions in that list, never as references, so the
//! last-to-first wrap of a polygon is just an index.

use std::fmt;
use std::sync::Arc;

use crate::geodesy::{Coordinate, EdgeMetrics};
use crate::traits::{GeodesyProvider, PointHooks};

/// One node of a path with its cached metrics.
#[derive(Clone, Default)]
pub struct PathPoint {
    pub(crate) coordinate: Coordinate,
    pub(crate) index: usize,
    pub(crate) prev_index: Option<usize>,
    pub(crate) next_index: Option<usize>,
    pub(crate) prev_edge: Option<EdgeMetrics>,
    pub(crate) next_edge: Option<EdgeMetrics>,
    pub(crate) total_distance: f64,
    pub(crate) total_rhumb_distance: f64,
    pub(crate) total_distance_to_end: f64,
    pub(crate) total_rhumb_distance_to_end: f64,
    pub(crate) hooks: Option<Arc<dyn PointHooks>>,
}

/// The predecessor handed to [`PathPoint::relink`]: the point itself and the
/// metrics of the edge leading from it to the point being relinked.
pub(crate) struct Predecessor<'a> {
    pub point: &'a PathPoint,
    pub edge: EdgeMetrics,
}

/// The successor handed to [`PathPoint::relink`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Successor {
    pub index: usize,
    pub coordinate: Coordinate,
}

impl PathPoint {
    pub(crate) fn new(coordinate: Coordinate, hooks: Option<Arc<dyn PointHooks>>) -> Self {
        Self {
            coordinate,
            hooks,
            ..Self::default()
        }
    }

    /// Recompute the neighbour links, the forward edge and the cumulative
    /// totals. The backward edge is taken as given so both endpoints of an
    /// edge share one computation.
    pub(crate) fn relink<G: GeodesyProvider + ?Sized>(
        &mut self,
        prev: Option<Predecessor<'_>>,
        next: Option<Successor>,
        geodesy: &G,
    ) {
        match prev {
            Some(Predecessor { point, edge }) => {
                self.prev_index = Some(point.index);
                self.prev_edge = Some(edge);
                self.total_distance = point.total_distance + edge.distance;
                self.total_rhumb_distance = point.total_rhumb_distance + edge.rhumb_distance;
            }
            None => {
                self.prev_index = None;
                self.prev_edge = None;
                self.total_distance = 0.0;
                self.total_rhumb_distance = 0.0;
            }
        }

        self.next_index = next.map(|next| next.index);
        self.next_edge = next.map(|next| EdgeMetrics::between(self.coordinate, next.coordinate, geodesy));
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }

    /// Position in the owning list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position of the previous point, `None` at the start of the path.
    pub fn prev_index(&self) -> Option<usize> {
        self.prev_index
    }

    /// Position of the next point; wraps to 0 on the last point of a polygon.
    pub fn next_index(&self) -> Option<usize> {
        self.next_index
    }

    pub fn prev_edge(&self) -> Option<&EdgeMetrics> {
        self.prev_edge.as_ref()
    }

    pub fn next_edge(&self) -> Option<&EdgeMetrics> {
        self.next_edge.as_ref()
    }

    /// Great-circle distance from the start of the path to this point.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn total_rhumb_distance(&self) -> f64 {
        self.total_rhumb_distance
    }

    /// Great-circle distance left from this point to the end of the path
    /// (back to the first point for a polygon).
    pub fn total_distance_to_end(&self) -> f64 {
        self.total_distance_to_end
    }

    pub fn total_rhumb_distance_to_end(&self) -> f64 {
        self.total_rhumb_distance_to_end
    }

    /// Cumulative distance in the selected metric family.
    pub fn cumulative(&self, rhumb: bool) -> f64 {
        if rhumb { self.total_rhumb_distance } else { self.total_distance }
    }

    /// Cumulative distance at the far end of the forward edge, if any.
    pub fn cumulative_at_next(&self, rhumb: bool) -> Option<f64> {
        self.next_edge.map(|edge| self.cumulative(rhumb) + edge.length(rhumb))
    }

    pub fn hooks(&self) -> Option<&Arc<dyn PointHooks>> {
        self.hooks.as_ref()
    }

    pub(crate) fn notify_remove(&self) {
        if let Some(hooks) = &self.hooks {
            hooks.on_remove(self);
        }
    }
}

impl fmt::Debug for PathPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathPoint")
            .field("coordinate", &self.coordinate)
            .field("index", &self.index)
            .field("prev_index", &self.prev_index)
            .field("next_index", &self.next_index)
            .field("prev_edge", &self.prev_edge)
            .field("next_edge", &self.next_edge)
            .field("total_distance", &self.total_distance)
            .field("total_rhumb_distance", &self.total_rhumb_distance)
            .field("total_distance_to_end", &self.total_distance_to_end)
            .field("total_rhumb_distance_to_end", &self.total_rhumb_distance_to_end)
            .field("hooks", &self.hooks.is_some())
            .finish()
    }
}
