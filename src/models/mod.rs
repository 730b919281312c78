//! Domain model types for delivery zoning.
//!
//! Provides the core records: planar points, delivery points carrying a
//! zone label, centroids, zones produced by clustering, and closed routes
//! produced by the route builder.

mod delivery;
mod point;
mod route;
mod zone;

pub use delivery::DeliveryPoint;
pub use point::{Centroid, Point};
pub use route::Route;
pub use zone::Zone;
