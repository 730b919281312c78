//! Zone type produced by clustering.

use serde::{Deserialize, Serialize};

use super::{Centroid, DeliveryPoint, Point};

/// The result of clustering for one zone: its final centroid and members.
///
/// Every member's `zone_id` equals the zone's `id`.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Centroid, DeliveryPoint, Point, Zone};
///
/// let members = vec![DeliveryPoint::new(0, 1.0, 1.0).with_zone(0)];
/// let zone = Zone::new(0, Centroid::new(0, Point::new(1.0, 1.0)), members);
/// assert_eq!(zone.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    id: usize,
    centroid: Centroid,
    points: Vec<DeliveryPoint>,
}

impl Zone {
    /// Creates a zone from its centroid and member points.
    pub fn new(id: usize, centroid: Centroid, points: Vec<DeliveryPoint>) -> Self {
        Self {
            id,
            centroid,
            points,
        }
    }

    /// Zone number.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Final centroid of this zone.
    pub fn centroid(&self) -> &Centroid {
        &self.centroid
    }

    /// Member delivery points, in input order.
    pub fn points(&self) -> &[DeliveryPoint] {
        &self.points
    }

    /// Member positions, in input order.
    pub fn positions(&self) -> Vec<Point> {
        self.points.iter().map(DeliveryPoint::position).collect()
    }

    /// Number of member points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point was assigned to this zone.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
