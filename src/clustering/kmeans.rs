//! K-means zone clustering.
//!
//! # Algorithm
//!
//! 1. Seed `k` centroids from distinct input points chosen uniformly at random.
//! 2. Assign every point to its nearest centroid (lowest id wins ties).
//! 3. Move each centroid to the mean of its members. A centroid left with
//!    no members is reseeded at a random point of the whole input.
//! 4. Repeat until an assignment pass changes nothing or the iteration
//!    ceiling is reached.
//!
//! The result is a local minimum of within-zone variance, not the global one.
//!
//! # Complexity
//!
//! O(n·k) per iteration, at most [`MAX_ITERATIONS`] iterations.
//!
//! # Reference
//!
//! Lloyd, S.P. (1982). "Least squares quantization in PCM",
//! *IEEE Transactions on Information Theory* 28(2), 129-137.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geometry::distance;
use crate::models::{Centroid, DeliveryPoint, Point, Zone};

/// Default iteration ceiling for [`cluster`].
pub const MAX_ITERATIONS: usize = 50;

/// Output of a clustering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringResult {
    /// One zone per centroid, ordered by zone id.
    pub zones: Vec<Zone>,
    /// Copies of the input points, in input order, each carrying its zone label.
    pub points: Vec<DeliveryPoint>,
    /// Number of assignment passes performed.
    pub iterations: usize,
    /// `true` if the last assignment pass changed nothing.
    pub converged: bool,
}

/// Partitions `points` into `k` zones with at most [`MAX_ITERATIONS`] passes.
///
/// The input slice is not modified. Randomness (seeding and empty-zone
/// reseeding) is drawn from `rng`, so equal seeds give equal results.
///
/// Callers should ensure `1 <= k <= points.len()`. A `k` above the point
/// count is reduced to it; an empty input or `k == 0` yields no zones.
///
/// # Examples
///
/// ```
/// use u_delivery::clustering::cluster;
/// use u_delivery::models::DeliveryPoint;
/// use u_delivery::random::create_rng;
///
/// let points = vec![
///     DeliveryPoint::new(0, 0.0, 0.0),
///     DeliveryPoint::new(1, 1.0, 0.0),
///     DeliveryPoint::new(2, 100.0, 100.0),
///     DeliveryPoint::new(3, 101.0, 100.0),
/// ];
/// let mut rng = create_rng(42);
/// let result = cluster(&points, 2, &mut rng);
///
/// assert_eq!(result.zones.len(), 2);
/// assert_eq!(result.points[0].zone_id, result.points[1].zone_id);
/// assert_ne!(result.points[0].zone_id, result.points[2].zone_id);
/// ```
pub fn cluster<R: Rng>(points: &[DeliveryPoint], k: usize, rng: &mut R) -> ClusteringResult {
    cluster_with_limit(points, k, MAX_ITERATIONS, rng)
}

/// Partitions `points` into `k` zones with at most `max_iterations` passes.
///
/// See [`cluster`]. Hitting the ceiling is not an error; the current
/// assignment is returned with `converged == false`.
pub fn cluster_with_limit<R: Rng>(
    points: &[DeliveryPoint],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> ClusteringResult {
    let mut labeled: Vec<DeliveryPoint> = points
        .iter()
        .map(|p| DeliveryPoint {
            zone_id: None,
            ..p.clone()
        })
        .collect();

    let n = points.len();
    if n == 0 || k == 0 {
        return ClusteringResult {
            zones: Vec::new(),
            points: labeled,
            iterations: 0,
            converged: true,
        };
    }

    let k = if k > n {
        debug!(k, points = n, "zone count exceeds point count; reducing");
        n
    } else {
        k
    };

    let mut centroids = seed_centroids(points, k, rng);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        iterations += 1;
        let changed = assign(&mut labeled, &centroids);
        debug!(iteration = iterations, changed, "k-means assignment pass");

        if !changed {
            converged = true;
            break;
        }
        centroids = update_centroids(&labeled, k, rng);
    }

    if !converged {
        warn!(
            max_iterations,
            k,
            points = n,
            "k-means stopped at iteration ceiling without converging"
        );
    }

    let zones = centroids
        .iter()
        .map(|c| {
            let members = labeled
                .iter()
                .filter(|p| p.zone_id == Some(c.id))
                .cloned()
                .collect();
            Zone::new(c.id, *c, members)
        })
        .collect();

    ClusteringResult {
        zones,
        points: labeled,
        iterations,
        converged,
    }
}

/// Picks `k` distinct input points as initial centroids `0..k`.
fn seed_centroids<R: Rng>(points: &[DeliveryPoint], k: usize, rng: &mut R) -> Vec<Centroid> {
    index::sample(rng, points.len(), k)
        .iter()
        .enumerate()
        .map(|(id, idx)| Centroid::new(id, points[idx].position()))
        .collect()
}

/// Index of the nearest centroid; the first minimum in id order wins.
fn nearest_centroid(p: &Point, centroids: &[Centroid]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for c in centroids {
        let d = distance(p, &c.position());
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((c.id, d)),
        }
    }
    best.map(|(id, _)| id)
}

/// Relabels every point; returns `true` if any label changed.
fn assign(points: &mut [DeliveryPoint], centroids: &[Centroid]) -> bool {
    let mut changed = false;
    for p in points.iter_mut() {
        let zone = nearest_centroid(&p.position(), centroids);
        if p.zone_id != zone {
            changed = true;
            p.zone_id = zone;
        }
    }
    changed
}

/// Recomputes each centroid as the mean of its members.
fn update_centroids<R: Rng>(points: &[DeliveryPoint], k: usize, rng: &mut R) -> Vec<Centroid> {
    let mut sums = vec![(0.0_f64, 0.0_f64, 0_usize); k];
    for p in points {
        if let Some(z) = p.zone_id {
            let s = &mut sums[z];
            s.0 += p.x;
            s.1 += p.y;
            s.2 += 1;
        }
    }

    sums.into_iter()
        .enumerate()
        .map(|(id, (sx, sy, count))| {
            if count > 0 {
                Centroid::new(id, Point::new(sx / count as f64, sy / count as f64))
            } else {
                // Drawn from the full input, not only unassigned points.
                let idx = rng.random_range(0..points.len());
                debug!(zone = id, reseed_point = points[idx].id, "reseeding empty zone");
                Centroid::new(id, points[idx].position())
            }
        })
        .collect()
}
