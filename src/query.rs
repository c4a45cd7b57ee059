//! "Where is the path at distance D" queries.

use std::sync::Arc;

use crate::geodesy::{Coordinate, EdgeMetrics};
use crate::list::PathList;
use crate::point::{PathPoint, Predecessor, Successor};
use crate::traits::PointHooks;

/// The location on a [`PathList`] at a cumulative distance from its start.
///
/// The query does not borrow the list: it is resolved against the list
/// passed to [`new`](Self::new), [`set_distance`](Self::set_distance) or
/// [`recompute`](Self::recompute), and goes stale when that list changes
/// until it is recomputed.
///
/// A distance outside `0..=list.get_distance()`, or a list with fewer than
/// two points, is not an error: [`exists`](Self::exists) turns false and the
/// coordinate falls back to `(0, 0)`.
#[derive(Debug, Clone, Default)]
pub struct DistanceQueryPoint {
    distance: Option<f64>,
    exists: bool,
    bearing: Option<f64>,
    segment: Option<usize>,
    point: PathPoint,
}

impl DistanceQueryPoint {
    pub fn new(distance: impl Into<Option<f64>>, list: &PathList) -> Self {
        let mut query = Self::default();
        query.set_distance(distance, list);
        query
    }

    /// Store a new target distance and resolve it right away.
    pub fn set_distance(&mut self, distance: impl Into<Option<f64>>, list: &PathList) {
        self.distance = distance.into();
        self.recompute(list);
    }

    /// Resolve the current target distance against `list`.
    pub fn recompute(&mut self, list: &PathList) {
        self.exists = false;
        self.bearing = None;
        self.segment = None;
        let hooks = self.point.hooks.take();
        self.point = PathPoint::new(Coordinate::default(), hooks);

        let Some(distance) = self.distance else {
            return;
        };
        let rhumb = list.is_rhumb();
        if distance.is_nan() || distance < 0.0 || distance > list.get_distance() || list.len() < 2 {
            tracing::trace!(distance, total = list.get_distance(), points = list.len(), "distance not on path");
            return;
        }

        // First segment whose cumulative range contains the distance; a
        // distance on a shared boundary resolves to the earlier segment.
        let found = list.points().iter().find_map(|start| {
            let begin = start.cumulative(rhumb);
            let end = start.cumulative_at_next(rhumb)?;
            let end_point = list.point(start.next_index()?)?;
            let edge = start.next_edge()?;
            (begin <= distance && distance <= end).then_some((start, end_point, *edge, begin, end))
        });
        let Some((start, end_point, edge, begin, end)) = found else {
            return;
        };

        let geodesy = list.geodesy();
        let offset = distance - begin;
        let at_end = distance >= end;
        // Segment endpoints are returned as stored rather than re-derived.
        let coordinate = if offset <= 0.0 {
            start.coordinate()
        } else if at_end {
            end_point.coordinate()
        } else if rhumb {
            geodesy.rhumb_destination(start.coordinate(), edge.rhumb_bearing, offset)
        } else {
            geodesy.intermediate_point(start.coordinate(), end_point.coordinate(), offset / (end - begin))
        };

        self.exists = true;
        self.segment = Some(start.index());
        self.point.coordinate = coordinate;
        self.point.index = start.index();
        self.point.relink(
            Some(Predecessor {
                point: start,
                edge: EdgeMetrics::between(start.coordinate(), coordinate, geodesy),
            }),
            Some(Successor {
                index: end_point.index(),
                coordinate: end_point.coordinate(),
            }),
            geodesy,
        );
        self.point.total_distance_to_end = list.total_distance() - self.point.total_distance;
        self.point.total_rhumb_distance_to_end = list.total_rhumb_distance() - self.point.total_rhumb_distance;

        // At the very end of a segment the remaining edge has no direction,
        // so report the heading the segment arrives with.
        self.bearing = match self.point.next_edge() {
            Some(next) if !at_end => Some(next.heading(rhumb)),
            _ if rhumb => Some(edge.final_rhumb_bearing),
            _ => Some(edge.final_bearing),
        };

        tracing::trace!(
            distance,
            segment = start.index(),
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "distance resolved"
        );
    }

    /// Notify the query's own hooks. The list is never touched.
    pub fn remove(self) {
        self.point.notify_remove();
    }

    pub fn set_hooks(&mut self, hooks: Option<Arc<dyn PointHooks>>) {
        self.point.hooks = hooks;
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Resolved coordinate, `(0, 0)` when the distance is not on the path.
    pub fn coordinate(&self) -> Coordinate {
        self.point.coordinate()
    }

    pub fn bearing(&self) -> Option<f64> {
        self.bearing
    }

    /// Index of the point starting the segment the query landed on.
    pub fn segment(&self) -> Option<usize> {
        self.segment
    }

    /// The query as a point relinked between the two points around it.
    pub fn point(&self) -> &PathPoint {
        &self.point
    }
}
