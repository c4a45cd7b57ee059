//! The ordered point list and its full recomputation pass.
//!
//! Every structural change (append, insert, remove, move) ends with
//! [`PathList::update`], which walks the whole sequence once: indices and
//! neighbour links are reassigned, each edge is measured exactly once by the
//! geodesy provider, cumulative totals are rolled forward and then back from
//! the end, and finally the hooks fire.
//!
//! Hooks and the update callback only see `&PathList`, so mutating a list
//! from inside its own update pass is rejected at compile time.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::geodesy::{Coordinate, SphericalGeodesy};
use crate::point::{PathPoint, Predecessor, Successor};
use crate::polyline::Polyline;
use crate::traits::{GeodesyProvider, PointHooks};
use crate::{PathError, Result};

/// Callback fired after every full update.
pub type UpdateCallback = Box<dyn Fn(&PathList) + Send + Sync>;

/// Construction-time flags of a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// Close the path with an edge from the last point back to the first.
    pub is_polygon: bool,
    /// Report rhumb-line totals and resolve distance queries along rhumb lines.
    pub is_rhumb: bool,
}

/// Builder for a [`PathList`] with a custom provider, callback or hooks.
#[derive(Default)]
pub struct PathListBuilder {
    options: PathOptions,
    geodesy: Option<Box<dyn GeodesyProvider>>,
    on_update: Option<UpdateCallback>,
    point_hooks: Option<Arc<dyn PointHooks>>,
}

impl PathListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: PathOptions) -> Self {
        self.options = options;
        self
    }

    pub fn polygon(mut self, is_polygon: bool) -> Self {
        self.options.is_polygon = is_polygon;
        self
    }

    pub fn rhumb(mut self, is_rhumb: bool) -> Self {
        self.options.is_rhumb = is_rhumb;
        self
    }

    pub fn geodesy(mut self, geodesy: impl GeodesyProvider + 'static) -> Self {
        self.geodesy = Some(Box::new(geodesy));
        self
    }

    pub fn on_update(mut self, callback: impl Fn(&PathList) + Send + Sync + 'static) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Hooks attached to every point the list creates.
    pub fn point_hooks(mut self, hooks: Arc<dyn PointHooks>) -> Self {
        self.point_hooks = Some(hooks);
        self
    }

    /// Build the list from `coordinates` in order and run the first update.
    pub fn build<I, C>(self, coordinates: I) -> Result<PathList>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        let geodesy = self.geodesy.unwrap_or_else(|| Box::new(SphericalGeodesy));

        let mut points = Vec::new();
        for coordinate in coordinates {
            let coordinate = coordinate.into();
            geodesy.validate(coordinate)?;
            points.push(PathPoint::new(coordinate, self.point_hooks.clone()));
        }

        let mut list = PathList {
            points,
            options: self.options,
            geodesy,
            on_update: self.on_update,
            point_hooks: self.point_hooks,
            total_distance: 0.0,
            total_rhumb_distance: 0.0,
        };
        list.update()?;
        Ok(list)
    }
}

/// An open polyline or closed polygon of geographic points.
pub struct PathList {
    points: Vec<PathPoint>,
    options: PathOptions,
    geodesy: Box<dyn GeodesyProvider>,
    on_update: Option<UpdateCallback>,
    point_hooks: Option<Arc<dyn PointHooks>>,
    total_distance: f64,
    total_rhumb_distance: f64,
}

impl PathList {
    /// Build a list measured with [`SphericalGeodesy`].
    pub fn new<I, C>(coordinates: I, options: PathOptions) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        PathListBuilder::new().options(options).build(coordinates)
    }

    pub fn builder() -> PathListBuilder {
        PathListBuilder::new()
    }

    pub fn from_polyline(polyline: &Polyline, options: PathOptions) -> Result<Self> {
        Self::new(polyline.points().iter().copied(), options)
    }

    /// Recompute every point and the list totals in a single pass.
    ///
    /// Fails only if the provider rejects one of the coordinates, in which
    /// case nothing is recomputed.
    pub fn update(&mut self) -> Result<()> {
        for point in &self.points {
            self.geodesy.validate(point.coordinate)?;
        }

        let len = self.points.len();
        let is_polygon = self.options.is_polygon;

        for i in 0..len {
            let next = if i + 1 < len {
                Some(Successor {
                    index: i + 1,
                    coordinate: self.points[i + 1].coordinate,
                })
            } else if is_polygon {
                Some(Successor {
                    index: 0,
                    coordinate: self.points[0].coordinate,
                })
            } else {
                None
            };

            let (before, rest) = self.points.split_at_mut(i);
            // The first point never has a predecessor, even in a polygon.
            let prev = before
                .last()
                .and_then(|point| point.next_edge.map(|edge| Predecessor { point, edge }));

            let point = &mut rest[0];
            point.index = i;
            point.relink(prev, next, self.geodesy.as_ref());
        }

        (self.total_distance, self.total_rhumb_distance) = match self.points.last() {
            Some(last) => {
                let closing = if is_polygon { last.next_edge } else { None };
                (
                    last.total_distance + closing.map_or(0.0, |edge| edge.distance),
                    last.total_rhumb_distance + closing.map_or(0.0, |edge| edge.rhumb_distance),
                )
            }
            None => (0.0, 0.0),
        };

        for point in &mut self.points {
            point.total_distance_to_end = self.total_distance - point.total_distance;
            point.total_rhumb_distance_to_end = self.total_rhumb_distance - point.total_rhumb_distance;
        }

        tracing::debug!(
            points = len,
            polygon = is_polygon,
            total_distance = self.total_distance,
            total_rhumb_distance = self.total_rhumb_distance,
            "path updated"
        );

        for point in &self.points {
            if let Some(hooks) = &point.hooks {
                hooks.on_update(point, self);
            }
        }

        if let Some(callback) = &self.on_update {
            callback(self);
        }

        Ok(())
    }

    /// Add a point as the new last element of the path.
    pub fn append(&mut self, coordinate: impl Into<Coordinate>) -> Result<&PathPoint> {
        let position = self.points.len();
        self.insert_at(position, coordinate.into())
    }

    /// Insert a point right after position `after_index`.
    ///
    /// Without an index the point goes *before* the current last point
    /// (position `len - 1`), or becomes the only point of an empty list.
    /// Use [`append`](Self::append) to add at the end.
    pub fn insert(&mut self, coordinate: impl Into<Coordinate>, after_index: Option<usize>) -> Result<&PathPoint> {
        let len = self.points.len();
        let position = match after_index {
            Some(index) if index < len => index + 1,
            Some(index) => {
                tracing::warn!(index, len, "insert after an index outside the path");
                return Err(PathError::IndexOutOfRange { index, len });
            }
            None => len.saturating_sub(1),
        };
        self.insert_at(position, coordinate.into())
    }

    fn insert_at(&mut self, position: usize, coordinate: Coordinate) -> Result<&PathPoint> {
        self.geodesy.validate(coordinate)?;
        self.points
            .insert(position, PathPoint::new(coordinate, self.point_hooks.clone()));
        self.update()?;
        Ok(&self.points[position])
    }

    /// Detach the point at `index` and return it.
    ///
    /// The point's `on_remove` hook fires before it leaves the list.
    pub fn remove(&mut self, index: usize) -> Result<PathPoint> {
        self.check_index(index)?;
        self.points[index].notify_remove();
        let point = self.points.remove(index);
        self.update()?;
        Ok(point)
    }

    /// Move the point at `index` to a new coordinate.
    pub fn move_point(&mut self, index: usize, coordinate: impl Into<Coordinate>) -> Result<&PathPoint> {
        self.check_index(index)?;
        let coordinate = coordinate.into();
        self.geodesy.validate(coordinate)?;
        self.points[index].coordinate = coordinate;
        self.update()?;
        Ok(&self.points[index])
    }

    /// Replace the hooks of a single point.
    pub fn set_point_hooks(&mut self, index: usize, hooks: Option<Arc<dyn PointHooks>>) -> Result<()> {
        self.check_index(index)?;
        self.points[index].hooks = hooks;
        Ok(())
    }

    pub fn set_polygon(&mut self, is_polygon: bool) -> Result<()> {
        self.options.is_polygon = is_polygon;
        self.update()
    }

    pub fn set_rhumb(&mut self, is_rhumb: bool) -> Result<()> {
        self.options.is_rhumb = is_rhumb;
        self.update()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.points.len();
        if index < len {
            Ok(())
        } else {
            tracing::warn!(index, len, "point index outside the path");
            Err(PathError::IndexOutOfRange { index, len })
        }
    }

    /// Total length in the active metric family.
    pub fn get_distance(&self) -> f64 {
        if self.options.is_rhumb {
            self.total_rhumb_distance
        } else {
            self.total_distance
        }
    }

    /// Great-circle length, including the closing edge of a polygon.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn total_rhumb_distance(&self) -> f64 {
        self.total_rhumb_distance
    }

    pub fn first_point(&self) -> Option<&PathPoint> {
        self.points.first()
    }

    pub fn last_point(&self) -> Option<&PathPoint> {
        self.points.last()
    }

    pub fn point(&self, index: usize) -> Option<&PathPoint> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn options(&self) -> PathOptions {
        self.options
    }

    pub fn is_polygon(&self) -> bool {
        self.options.is_polygon
    }

    pub fn is_rhumb(&self) -> bool {
        self.options.is_rhumb
    }

    pub fn geodesy(&self) -> &dyn GeodesyProvider {
        self.geodesy.as_ref()
    }

    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.points.iter().map(PathPoint::coordinate).collect()
    }

    pub fn to_polyline(&self) -> Polyline {
        Polyline::new(self.coordinates())
    }
}

impl fmt::Debug for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathList")
            .field("points", &self.points)
            .field("options", &self.options)
            .field("total_distance", &self.total_distance)
            .field("total_rhumb_distance", &self.total_rhumb_distance)
            .field("on_update", &self.on_update.is_some())
            .finish_non_exhaustive()
    }
}
