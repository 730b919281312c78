//! Delivery point type.

use serde::{Deserialize, Serialize};

use super::Point;

/// A location that must be served, identified by a unique `id`.
///
/// `zone_id` is unset until clustering labels the point.
///
/// # Examples
///
/// ```
/// use u_delivery::models::DeliveryPoint;
///
/// let p = DeliveryPoint::new(7, 120.0, 80.0);
/// assert_eq!(p.id, 7);
/// assert!(p.zone_id.is_none());
///
/// let labeled = p.with_zone(2);
/// assert_eq!(labeled.zone_id, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPoint {
    /// Unique identifier.
    pub id: usize,
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
    /// Zone the point belongs to, once clustered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<usize>,
}

impl DeliveryPoint {
    /// Creates an unlabeled delivery point.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            zone_id: None,
        }
    }

    /// Returns a copy of this point labeled with `zone_id`.
    pub fn with_zone(&self, zone_id: usize) -> Self {
        Self {
            zone_id: Some(zone_id),
            ..self.clone()
        }
    }

    /// Position of this delivery point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<&DeliveryPoint> for Point {
    fn from(p: &DeliveryPoint) -> Self {
        p.position()
    }
}
