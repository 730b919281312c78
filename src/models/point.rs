//! Planar point and centroid types.

use serde::{Deserialize, Serialize};

/// A real-valued coordinate in the plane.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        crate::geometry::distance(self, other)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// The representative position of one zone during clustering.
///
/// `id` is the zone number in `0..k`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    /// Zone number this centroid represents.
    pub id: usize,
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Centroid {
    /// Creates a centroid for zone `id` at the given position.
    pub fn new(id: usize, position: Point) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
        }
    }

    /// Position of this centroid.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
