//! Staged dispatch session: generate → cluster → route → simulate.
//!
//! A [`Dispatcher`] owns the data of one interactive session and enforces
//! stage order. Starting an earlier stage again discards everything
//! derived from the previous run.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clustering::cluster_with_limit;
use crate::config::DispatchConfig;
use crate::constructive::{build_all_routes, RoutePlan};
use crate::error::{ConfigError, DispatchError};
use crate::generation::generate_points;
use crate::models::{DeliveryPoint, Point, Zone};
use crate::random::create_rng;
use crate::simulation::Simulation;

/// Furthest completed stage of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Nothing generated.
    Idle,
    /// Points exist.
    Generated,
    /// Points are labeled and zones exist.
    Clustered,
    /// Every zone has a route.
    Routed,
}

impl Stage {
    /// Human-readable status line for this stage.
    pub fn status(&self) -> &'static str {
        match self {
            Stage::Idle => "Ready to start",
            Stage::Generated => "Delivery points generated. Ready to cluster.",
            Stage::Clustered => "Clustering complete. Ready to calculate routes.",
            Stage::Routed => "Route optimization complete. Ready to simulate.",
        }
    }
}

/// An interactive delivery planning session.
///
/// # Examples
///
/// ```
/// use u_delivery::config::DispatchConfig;
/// use u_delivery::dispatch::{Dispatcher, Stage};
///
/// let config = DispatchConfig { point_count: 30, zone_count: 3, seed: Some(1), ..Default::default() };
/// let mut session = Dispatcher::new(config).unwrap();
///
/// session.generate();
/// session.cluster().unwrap();
/// let plan = session.route().unwrap();
/// assert_eq!(plan.routes.len(), 3);
/// assert_eq!(session.stage(), Stage::Routed);
///
/// let sim = session.simulation().unwrap();
/// assert!(sim.frame(sim.total_duration()).finished);
/// ```
#[derive(Debug)]
pub struct Dispatcher {
    config: DispatchConfig,
    depot: Point,
    rng: StdRng,
    points: Vec<DeliveryPoint>,
    zones: Vec<Zone>,
    plan: Option<RoutePlan>,
    stage: Stage,
}

impl Dispatcher {
    /// Starts a session. The depot is the centre of the configured bounds.
    pub fn new(config: DispatchConfig) -> Result<Self, DispatchError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            depot: config.bounds.center(),
            config,
            rng,
            points: Vec::new(),
            zones: Vec::new(),
            plan: None,
            stage: Stage::Idle,
        })
    }

    /// Session configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Shared start and end point of every route.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Moves the depot; existing routes are discarded.
    pub fn set_depot(&mut self, depot: Point) {
        self.depot = depot;
        if self.plan.take().is_some() {
            self.stage = Stage::Clustered;
        }
    }

    /// Sets the number of points for the next generation.
    pub fn set_point_count(&mut self, count: usize) {
        self.config.point_count = count;
    }

    /// Sets the number of zones for the next clustering.
    pub fn set_zone_count(&mut self, k: usize) {
        self.config.zone_count = k;
    }

    /// Furthest completed stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current delivery points, labeled once clustered.
    pub fn points(&self) -> &[DeliveryPoint] {
        &self.points
    }

    /// Zones of the last clustering.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Routes of the last routing run.
    pub fn plan(&self) -> Option<&RoutePlan> {
        self.plan.as_ref()
    }

    /// Replaces all points with a fresh random set.
    pub fn generate(&mut self) -> &[DeliveryPoint] {
        let points = generate_points(self.config.point_count, &self.config.bounds, &mut self.rng);
        info!(count = points.len(), "generated delivery points");
        self.load_points(points);
        &self.points
    }

    /// Replaces all points with host-supplied ones.
    pub fn load_points(&mut self, points: Vec<DeliveryPoint>) {
        self.points = points;
        self.zones.clear();
        self.plan = None;
        self.stage = if self.points.is_empty() {
            Stage::Idle
        } else {
            Stage::Generated
        };
    }

    /// Partitions the current points into the configured number of zones.
    pub fn cluster(&mut self) -> Result<&[Zone], DispatchError> {
        if self.points.is_empty() {
            return Err(DispatchError::NoPoints);
        }
        let k = self.config.zone_count;
        if k == 0 || k > self.points.len() {
            return Err(DispatchError::InvalidZoneCount {
                k,
                points: self.points.len(),
            });
        }

        let result = cluster_with_limit(&self.points, k, self.config.max_iterations, &mut self.rng);
        info!(
            zones = result.zones.len(),
            iterations = result.iterations,
            converged = result.converged,
            "clustered delivery points"
        );

        self.points = result.points;
        self.zones = result.zones;
        self.plan = None;
        self.stage = Stage::Clustered;
        Ok(&self.zones)
    }

    /// Builds one route per zone from the depot.
    pub fn route(&mut self) -> Result<&RoutePlan, DispatchError> {
        if self.zones.is_empty() {
            return Err(DispatchError::NoZones);
        }

        let plan = build_all_routes(&self.zones, self.depot);
        info!(
            routes = plan.routes.len(),
            total_distance = plan.total_distance,
            "calculated routes"
        );
        self.stage = Stage::Routed;
        Ok(&*self.plan.insert(plan))
    }

    /// Starts a simulation run over the current routes.
    ///
    /// The returned run is a snapshot; later stages do not affect it, so a
    /// host should stop sampling it once a new run is started.
    pub fn simulation(&self) -> Result<Simulation, DispatchError> {
        match &self.plan {
            Some(plan) if !plan.is_empty() => {
                Simulation::new(plan.routes.clone(), self.config.speed).ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "speed must be positive and finite, got {}",
                        self.config.speed
                    ))
                    .into()
                })
            }
            _ => Err(DispatchError::NoRoutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(points: usize, zones: usize) -> Dispatcher {
        let config = DispatchConfig {
            point_count: points,
            zone_count: zones,
            seed: Some(42),
            ..Default::default()
        };
        Dispatcher::new(config).expect("valid config")
    }

    #[test]
    fn test_stage_order_enforced() {
        let mut d = seeded(10, 2);
        assert_eq!(d.stage(), Stage::Idle);
        assert!(matches!(d.cluster(), Err(DispatchError::NoPoints)));
        assert!(matches!(d.route(), Err(DispatchError::NoZones)));
        assert!(matches!(d.simulation(), Err(DispatchError::NoRoutes)));
    }

    #[test]
    fn test_full_pipeline() {
        let mut d = seeded(40, 4);
        assert_eq!(d.generate().len(), 40);
        assert_eq!(d.stage(), Stage::Generated);

        let zones = d.cluster().expect("points exist");
        assert_eq!(zones.len(), 4);
        assert!(d.points().iter().all(|p| p.zone_id.is_some()));

        let total = d.route().expect("zones exist").total_distance;
        let plan = d.plan().expect("routed");
        assert_eq!(plan.num_deliveries(), 40);
        assert!(total > 0.0);
        for r in &plan.routes {
            assert_eq!(r.start(), Some(&d.depot()));
            assert_eq!(r.end(), Some(&d.depot()));
        }

        let sim = d.simulation().expect("routes exist");
        assert_eq!(sim.routes().len(), 4);
        assert_eq!(sim.speed(), 150.0);
    }

    #[test]
    fn test_generate_supersedes_previous_run() {
        let mut d = seeded(12, 3);
        d.generate();
        d.cluster().expect("points exist");
        d.route().expect("zones exist");

        d.generate();
        assert_eq!(d.stage(), Stage::Generated);
        assert!(d.zones().is_empty());
        assert!(d.plan().is_none());
        assert!(d.points().iter().all(|p| p.zone_id.is_none()));
    }

    #[test]
    fn test_recluster_discards_routes() {
        let mut d = seeded(12, 3);
        d.generate();
        d.cluster().expect("points exist");
        d.route().expect("zones exist");
        d.set_zone_count(2);
        assert_eq!(d.cluster().expect("points exist").len(), 2);
        assert!(d.plan().is_none());
        assert!(matches!(d.simulation(), Err(DispatchError::NoRoutes)));
    }

    #[test]
    fn test_invalid_zone_count() {
        let mut d = seeded(3, 5);
        d.generate();
        assert!(matches!(
            d.cluster(),
            Err(DispatchError::InvalidZoneCount { k: 5, points: 3 })
        ));
    }

    #[test]
    fn test_load_points_and_depot() {
        let mut d = seeded(0, 1);
        d.load_points(vec![
            DeliveryPoint::new(0, 0.0, 0.0),
            DeliveryPoint::new(1, 10.0, 0.0),
            DeliveryPoint::new(2, 10.0, 10.0),
            DeliveryPoint::new(3, 0.0, 10.0),
        ]);
        d.set_depot(Point::new(5.0, 5.0));
        d.cluster().expect("points exist");
        let total = d.route().expect("zones exist").total_distance;
        assert!((total - (2.0 * 50f64.sqrt() + 30.0)).abs() < 1e-9);

        d.set_depot(Point::new(0.0, 0.0));
        assert_eq!(d.stage(), Stage::Clustered);
        assert!(d.plan().is_none());
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = seeded(25, 3);
        let mut b = seeded(25, 3);
        a.generate();
        b.generate();
        assert_eq!(a.points(), b.points());
        a.cluster().expect("points exist");
        b.cluster().expect("points exist");
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DispatchConfig {
            speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Dispatcher::new(config),
            Err(DispatchError::Config(_))
        ));
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(Stage::Idle.status(), "Ready to start");
        assert!(Stage::Routed.status().contains("simulate"));
    }
}
