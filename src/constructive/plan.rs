//! Route plan and per-route summaries.

use serde::{Deserialize, Serialize};

use crate::models::Route;

/// All zone routes of one routing run and their combined length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    /// One route per zone, in zone order.
    pub routes: Vec<Route>,
    /// Sum of all route distances.
    pub total_distance: f64,
}

/// Dashboard figures for one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    /// Zone served.
    pub zone_id: usize,
    /// Number of deliveries on the route.
    pub deliveries: usize,
    /// Route length.
    pub distance: f64,
    /// Length relative to the longest route, in `[0, 1]`.
    pub share: f64,
}

impl RoutePlan {
    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the plan has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Length of the longest route, or zero for an empty plan.
    pub fn longest_distance(&self) -> f64 {
        self.routes
            .iter()
            .map(Route::distance)
            .fold(0.0, f64::max)
    }

    /// Total number of deliveries across all routes.
    pub fn num_deliveries(&self) -> usize {
        self.routes.iter().map(Route::delivery_count).sum()
    }

    /// Per-route summaries ordered by zone id.
    pub fn summaries(&self) -> Vec<RouteSummary> {
        let longest = self.longest_distance();
        let mut summaries: Vec<RouteSummary> = self
            .routes
            .iter()
            .map(|r| RouteSummary {
                zone_id: r.zone_id(),
                deliveries: r.delivery_count(),
                distance: r.distance(),
                share: if longest > 0.0 {
                    r.distance() / longest
                } else {
                    0.0
                },
            })
            .collect();
        summaries.sort_by_key(|s| s.zone_id);
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn plan() -> RoutePlan {
        let depot = Point::origin();
        let routes = vec![
            Route::new(1, vec![depot, Point::new(0.0, 5.0), depot]),
            Route::new(0, vec![depot, Point::new(1.0, 0.0), Point::new(2.0, 0.0), depot]),
            Route::new(2, vec![depot, depot]),
        ];
        let total_distance = routes.iter().map(Route::distance).sum();
        RoutePlan {
            routes,
            total_distance,
        }
    }

    #[test]
    fn test_longest_and_counts() {
        let p = plan();
        assert_eq!(p.len(), 3);
        assert!((p.longest_distance() - 10.0).abs() < 1e-10);
        assert_eq!(p.num_deliveries(), 3);
    }

    #[test]
    fn test_summaries_sorted_with_share() {
        let s = plan().summaries();
        let ids: Vec<usize> = s.iter().map(|x| x.zone_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(s[0].deliveries, 2);
        assert!((s[0].share - 0.4).abs() < 1e-10);
        assert!((s[1].share - 1.0).abs() < 1e-10);
        assert_eq!(s[2].share, 0.0);
    }

    #[test]
    fn test_empty_plan() {
        let p = RoutePlan::default();
        assert!(p.is_empty());
        assert_eq!(p.longest_distance(), 0.0);
        assert!(p.summaries().is_empty());
    }

    #[test]
    fn test_all_zero_routes_share() {
        let depot = Point::new(3.0, 3.0);
        let p = RoutePlan {
            routes: vec![Route::new(0, vec![depot, depot])],
            total_distance: 0.0,
        };
        assert_eq!(p.summaries()[0].share, 0.0);
    }
}
