//! Constructive heuristics for building closed delivery tours.
//!
//! - [`build_route`] — Greedy nearest-neighbor tour from a start point, O(n²)
//! - [`build_all_routes`] — One independent tour per zone from a shared depot

mod nearest_neighbor;
mod plan;

pub use nearest_neighbor::{build_all_routes, build_route, Tour};
pub use plan::{RoutePlan, RouteSummary};
