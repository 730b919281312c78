//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the depot, always visit the nearest
//! unvisited point, then return to the depot.
//!
//! # Complexity
//!
//! O(n²) where n = number of points in the zone.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use tracing::debug;

use super::RoutePlan;
use crate::geometry::distance;
use crate::models::{Point, Route, Zone};

/// An ordered closed path and its length.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Stops in visiting order, `start` first and last.
    pub path: Vec<Point>,
    /// Sum of segment lengths along `path`.
    pub distance: f64,
}

/// Builds a closed tour through `points` starting and ending at `start`.
///
/// At each step the nearest unvisited point is chosen; ties go to the point
/// that comes first in `points`. An empty input yields `[start, start]`
/// with distance zero.
///
/// # Examples
///
/// ```
/// use u_delivery::constructive::build_route;
/// use u_delivery::models::Point;
///
/// let points = [Point::new(3.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
/// let tour = build_route(&points, Point::new(0.0, 0.0));
///
/// assert_eq!(tour.path.len(), 5);
/// assert_eq!(tour.path[1], Point::new(1.0, 0.0));
/// // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
/// assert!((tour.distance - 6.0).abs() < 1e-10);
/// ```
pub fn build_route(points: &[Point], start: Point) -> Tour {
    if points.is_empty() {
        return Tour {
            path: vec![start, start],
            distance: 0.0,
        };
    }

    let mut unvisited = points.to_vec();
    let mut path = Vec::with_capacity(points.len() + 2);
    path.push(start);
    let mut current = start;
    let mut total_distance = 0.0;

    while !unvisited.is_empty() {
        // Find nearest unvisited point; strict `<` keeps the earliest on ties
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in unvisited.iter().enumerate() {
            let d = distance(&current, p);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        match best {
            Some((next, d)) => {
                total_distance += d;
                current = unvisited.remove(next);
                path.push(current);
            }
            None => break,
        }
    }

    // Return to start
    total_distance += distance(&current, &start);
    path.push(start);

    Tour {
        path,
        distance: total_distance,
    }
}

/// Builds one tour per zone from the shared `depot` and sums their lengths.
///
/// Zones are routed independently; routes come back in zone order.
///
/// # Examples
///
/// ```
/// use u_delivery::constructive::build_all_routes;
/// use u_delivery::models::{Centroid, DeliveryPoint, Point, Zone};
///
/// let zones = vec![
///     Zone::new(0, Centroid::new(0, Point::new(3.0, 4.0)),
///               vec![DeliveryPoint::new(0, 3.0, 4.0).with_zone(0)]),
///     Zone::new(1, Centroid::new(1, Point::new(0.0, 0.0)), vec![]),
/// ];
/// let plan = build_all_routes(&zones, Point::new(0.0, 0.0));
///
/// assert_eq!(plan.routes.len(), 2);
/// assert!((plan.total_distance - 10.0).abs() < 1e-10);
/// ```
pub fn build_all_routes(zones: &[Zone], depot: Point) -> RoutePlan {
    let mut total_distance = 0.0;
    let routes: Vec<Route> = zones
        .iter()
        .map(|zone| {
            let tour = build_route(&zone.positions(), depot);
            debug!(
                zone = zone.id(),
                stops = zone.len(),
                distance = tour.distance,
                "built nearest-neighbor route"
            );
            total_distance += tour.distance;
            Route::with_distance(zone.id(), tour.path, tour.distance)
        })
        .collect();

    RoutePlan {
        routes,
        total_distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::path_length;
    use crate::models::{Centroid, DeliveryPoint};

    fn corners() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_empty_zone_degenerate_path() {
        let depot = Point::new(5.0, 5.0);
        let tour = build_route(&[], depot);
        assert_eq!(tour.path, vec![depot, depot]);
        assert_eq!(tour.distance, 0.0);
    }

    #[test]
    fn test_square_from_center() {
        let depot = Point::new(5.0, 5.0);
        let tour = build_route(&corners(), depot);
        // All corners tie at ~7.07; the first listed wins
        assert_eq!(
            tour.path,
            vec![
                depot,
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
                depot,
            ]
        );
        let expected = 2.0 * 50f64.sqrt() + 30.0;
        assert!((tour.distance - expected).abs() < 1e-10);
        assert!((tour.distance - 44.142).abs() < 1e-3);
    }

    #[test]
    fn test_chooses_nearest() {
        let start = Point::new(0.0, 0.0);
        let points = [Point::new(10.0, 0.0), Point::new(1.0, 0.0)];
        let tour = build_route(&points, start);
        assert_eq!(tour.path[1], Point::new(1.0, 0.0));
        assert_eq!(tour.path[2], Point::new(10.0, 0.0));
        assert!((tour.distance - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_visits_each_point_once() {
        let points = vec![
            Point::new(3.0, 7.0),
            Point::new(-2.0, 1.0),
            Point::new(8.0, -4.0),
            Point::new(0.5, 0.5),
            Point::new(6.0, 6.0),
        ];
        let start = Point::new(1.0, 1.0);
        let tour = build_route(&points, start);
        assert_eq!(tour.path.len(), points.len() + 2);
        assert_eq!(tour.path.first(), Some(&start));
        assert_eq!(tour.path.last(), Some(&start));
        for p in &points {
            assert_eq!(tour.path[1..tour.path.len() - 1].iter().filter(|q| *q == p).count(), 1);
        }
        assert!((tour.distance - path_length(&tour.path)).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_points_kept() {
        let start = Point::origin();
        let p = Point::new(2.0, 0.0);
        let tour = build_route(&[p, p], start);
        assert_eq!(tour.path, vec![start, p, p, start]);
        assert!((tour.distance - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_all_routes_sum() {
        let depot = Point::new(0.0, 0.0);
        let zones = vec![
            Zone::new(
                0,
                Centroid::new(0, Point::new(1.0, 0.0)),
                vec![
                    DeliveryPoint::new(0, 1.0, 0.0).with_zone(0),
                    DeliveryPoint::new(1, 2.0, 0.0).with_zone(0),
                ],
            ),
            Zone::new(
                1,
                Centroid::new(1, Point::new(0.0, 3.0)),
                vec![DeliveryPoint::new(2, 0.0, 3.0).with_zone(1)],
            ),
            Zone::new(2, Centroid::new(2, Point::new(9.0, 9.0)), vec![]),
        ];
        let plan = build_all_routes(&zones, depot);
        assert_eq!(plan.routes.len(), 3);
        assert_eq!(plan.routes[0].zone_id(), 0);
        assert!((plan.routes[0].distance() - 4.0).abs() < 1e-10);
        assert!((plan.routes[1].distance() - 6.0).abs() < 1e-10);
        assert_eq!(plan.routes[2].path(), &[depot, depot]);
        assert!((plan.total_distance - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_all_routes_empty() {
        let plan = build_all_routes(&[], Point::origin());
        assert!(plan.routes.is_empty());
        assert_eq!(plan.total_distance, 0.0);
    }
}
