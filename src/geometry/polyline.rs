//! Distance-based walking along piecewise-linear paths.

use super::distance;
use crate::models::Point;

/// Sum of the segment lengths of `path`.
///
/// Empty and single-point paths have length zero.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Returns the point reached after travelling `distance_traveled` along
/// `path`, measured from `path[0]`.
///
/// Within a segment the position is linearly interpolated. Distances past
/// the end clamp to the last point and negative distances clamp to the
/// first. A zero-length segment resolves to its start point. An empty path
/// resolves to the origin.
///
/// # Examples
///
/// ```
/// use u_delivery::geometry::position_along_path;
/// use u_delivery::models::Point;
///
/// let path = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
/// assert_eq!(position_along_path(&path, 5.0), Point::new(5.0, 0.0));
/// assert_eq!(position_along_path(&path, 15.0), Point::new(10.0, 5.0));
/// assert_eq!(position_along_path(&path, 99.0), Point::new(10.0, 10.0));
/// ```
pub fn position_along_path(path: &[Point], distance_traveled: f64) -> Point {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Point::origin(),
    };
    if distance_traveled <= 0.0 {
        return first;
    }

    let mut covered = 0.0;
    for segment in path.windows(2) {
        let (start, end) = (segment[0], segment[1]);
        let length = distance(&start, &end);

        if covered + length >= distance_traveled {
            let fraction = (distance_traveled - covered) / length;
            if !fraction.is_finite() {
                return start;
            }
            return start.lerp(&end, fraction);
        }
        covered += length;
    }

    last
}
