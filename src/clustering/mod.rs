//! Spatial clustering of delivery points into zones.
//!
//! - [`cluster`] — k-means (Lloyd's iteration) with random seeding, O(n·k) per pass
//! - [`cluster_with_limit`] — same, with a caller-chosen iteration ceiling

mod kmeans;

pub use kmeans::{cluster, cluster_with_limit, ClusteringResult, MAX_ITERATIONS};
