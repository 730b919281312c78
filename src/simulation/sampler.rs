//! Stateless position sampler.

use crate::geometry::position_along_path;
use crate::models::{Point, Route};

/// Default vehicle speed, in distance units per second.
pub const DEFAULT_SPEED: f64 = 150.0;

/// Time needed to finish the longest route at `speed`.
///
/// Returns `None` when there are no routes.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Point, Route};
/// use u_delivery::simulation::total_duration;
///
/// let depot = Point::new(0.0, 0.0);
/// let routes = vec![
///     Route::new(0, vec![depot, Point::new(15.0, 0.0), depot]),
///     Route::new(1, vec![depot, Point::new(0.0, 75.0), depot]),
/// ];
/// assert_eq!(total_duration(&routes, 150.0), Some(1.0));
/// assert_eq!(total_duration(&[], 150.0), None);
/// ```
pub fn total_duration(routes: &[Route], speed: f64) -> Option<f64> {
    routes
        .iter()
        .map(Route::distance)
        .reduce(f64::max)
        .map(|longest| longest / speed)
}

/// Positions of all vehicles after `elapsed_seconds`, one per route in order.
///
/// Each vehicle has travelled `elapsed_seconds * speed` along its own path.
/// From [`total_duration`] onwards every vehicle sits at its path's final
/// point. The result depends only on the arguments.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Point, Route};
/// use u_delivery::simulation::sample;
///
/// let depot = Point::new(0.0, 0.0);
/// let routes = vec![Route::new(0, vec![depot, Point::new(10.0, 0.0), depot])];
///
/// assert_eq!(sample(&routes, 0.0, 2.0), vec![depot]);
/// assert_eq!(sample(&routes, 2.5, 2.0), vec![Point::new(5.0, 0.0)]);
/// assert_eq!(sample(&routes, 60.0, 2.0), vec![depot]);
/// ```
pub fn sample(routes: &[Route], elapsed_seconds: f64, speed: f64) -> Vec<Point> {
    let settled = total_duration(routes, speed).is_some_and(|total| elapsed_seconds >= total);
    if settled {
        return final_positions(routes);
    }

    let distance_traveled = elapsed_seconds * speed;
    routes
        .iter()
        .map(|r| position_along_path(r.path(), distance_traveled))
        .collect()
}

/// Final point of every route; the origin for an empty path.
pub(crate) fn final_positions(routes: &[Route]) -> Vec<Point> {
    routes
        .iter()
        .map(|r| r.end().copied().unwrap_or_default())
        .collect()
}
