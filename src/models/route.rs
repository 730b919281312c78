//! Closed route type.

use serde::{Deserialize, Serialize};

use super::Point;
use crate::geometry::path_length;

/// A closed tour for one zone, beginning and ending at the depot.
///
/// `distance` is the sum of the Euclidean segment lengths along `path`.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Point, Route};
///
/// let depot = Point::new(0.0, 0.0);
/// let route = Route::new(0, vec![depot, Point::new(3.0, 4.0), depot]);
/// assert_eq!(route.delivery_count(), 1);
/// assert!((route.distance() - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    zone_id: usize,
    path: Vec<Point>,
    distance: f64,
}

impl Route {
    /// Creates a route for `zone_id`, measuring the length of `path`.
    pub fn new(zone_id: usize, path: Vec<Point>) -> Self {
        let distance = path_length(&path);
        Self::with_distance(zone_id, path, distance)
    }

    /// Creates a route whose length was already accumulated by the caller.
    pub(crate) fn with_distance(zone_id: usize, path: Vec<Point>, distance: f64) -> Self {
        Self {
            zone_id,
            path,
            distance,
        }
    }

    /// Zone served by this route.
    pub fn zone_id(&self) -> usize {
        self.zone_id
    }

    /// Ordered stops, depot first and last.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Total tour length.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of deliveries, excluding the depot at both ends.
    pub fn delivery_count(&self) -> usize {
        self.path.len().saturating_sub(2)
    }

    /// First point of the path, if any.
    pub fn start(&self) -> Option<&Point> {
        self.path.first()
    }

    /// Last point of the path, if any.
    pub fn end(&self) -> Option<&Point> {
        self.path.last()
    }
}
