//! Planar geometry primitives shared by clustering, routing, and simulation.
//!
//! - [`distance`] — Euclidean distance between two points
//! - [`path_length`] — Total length of a polyline
//! - [`position_along_path`] — Point reached after walking a distance along a polyline

mod polyline;

pub use polyline::{path_length, position_along_path};

use crate::models::Point;

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use u_delivery::geometry::distance;
/// use u_delivery::models::Point;
///
/// let d = distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}
