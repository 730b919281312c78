//! Random delivery point generation inside a rectangular service area.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{DeliveryPoint, Point};

/// A rectangular service area `[0, width] × [0, height]` with an inner margin.
///
/// Generated points keep at least `margin` away from every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
    /// Distance kept free along each edge.
    pub margin: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 10.0,
        }
    }
}

impl Bounds {
    /// Creates bounds with the given extents and margin.
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Centre of the area, the conventional depot location.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns `true` if `p` lies inside the margin-padded area.
    pub fn contains(&self, p: &Point) -> bool {
        let (x_lo, x_hi) = padded_range(self.width, self.margin);
        let (y_lo, y_hi) = padded_range(self.height, self.margin);
        p.x >= x_lo && p.x <= x_hi && p.y >= y_lo && p.y <= y_hi
    }
}

/// `[margin, extent - margin]`, collapsed to the midpoint when the margin
/// leaves no room.
fn padded_range(extent: f64, margin: f64) -> (f64, f64) {
    if 2.0 * margin >= extent {
        let mid = extent / 2.0;
        (mid, mid)
    } else {
        (margin, extent - margin)
    }
}

/// Generates `count` unlabeled points uniformly inside the padded area.
///
/// Ids run from `0` to `count - 1`.
///
/// # Examples
///
/// ```
/// use u_delivery::generation::{generate_points, Bounds};
/// use u_delivery::random::create_rng;
///
/// let bounds = Bounds::default();
/// let points = generate_points(50, &bounds, &mut create_rng(42));
/// assert_eq!(points.len(), 50);
/// assert!(points.iter().all(|p| bounds.contains(&p.position())));
/// ```
pub fn generate_points<R: Rng>(count: usize, bounds: &Bounds, rng: &mut R) -> Vec<DeliveryPoint> {
    let (x_lo, x_hi) = padded_range(bounds.width, bounds.margin);
    let (y_lo, y_hi) = padded_range(bounds.height, bounds.margin);

    (0..count)
        .map(|id| {
            let x = x_lo + rng.random::<f64>() * (x_hi - x_lo);
            let y = y_lo + rng.random::<f64>() * (y_hi - y_lo);
            DeliveryPoint::new(id, x, y)
        })
        .collect()
}
