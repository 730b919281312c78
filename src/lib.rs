//! # u-delivery
//!
//! Delivery zoning and routing library: partitions delivery points into
//! zones, builds a closed tour per zone from a shared depot, and samples
//! vehicle positions along those tours over time.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, DeliveryPoint, Centroid, Zone, Route)
//! - [`geometry`] — Euclidean distance and walking along polylines
//! - [`clustering`] — K-means zone clustering
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`simulation`] — Time-driven vehicle position sampling
//! - [`generation`] — Random delivery point generation
//! - [`dispatch`] — Staged session tying the steps together
//!
//! ## Example
//!
//! ```
//! use u_delivery::clustering::cluster;
//! use u_delivery::constructive::build_all_routes;
//! use u_delivery::generation::{generate_points, Bounds};
//! use u_delivery::random::create_rng;
//! use u_delivery::simulation::{sample, total_duration};
//!
//! let mut rng = create_rng(42);
//! let bounds = Bounds::default();
//! let points = generate_points(50, &bounds, &mut rng);
//!
//! let clustered = cluster(&points, 5, &mut rng);
//! let plan = build_all_routes(&clustered.zones, bounds.center());
//!
//! let end = total_duration(&plan.routes, 150.0).unwrap();
//! let positions = sample(&plan.routes, end, 150.0);
//! assert!(positions.iter().all(|p| *p == bounds.center()));
//! ```

pub mod clustering;
pub mod config;
pub mod constructive;
pub mod dispatch;
pub mod error;
pub mod generation;
pub mod geometry;
pub mod models;
pub mod random;
pub mod simulation;

#[cfg(feature = "wasm")]
pub mod wasm;
