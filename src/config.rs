//! Configuration for a dispatch session.

use serde::{Deserialize, Serialize};

use crate::clustering::MAX_ITERATIONS;
use crate::error::ConfigError;
use crate::generation::Bounds;
use crate::simulation::DEFAULT_SPEED;

/// Parameters of a [`Dispatcher`](crate::dispatch::Dispatcher) session.
///
/// Missing fields take their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use u_delivery::config::DispatchConfig;
///
/// let config = DispatchConfig::from_json(r#"{"zoneCount": 3, "seed": 7}"#).unwrap();
/// assert_eq!(config.zone_count, 3);
/// assert_eq!(config.point_count, 50);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DispatchConfig {
    /// Number of points produced by each generation.
    pub point_count: usize,
    /// Number of zones (and vehicles).
    pub zone_count: usize,
    /// Service area for generated points; its centre is the depot.
    pub bounds: Bounds,
    /// Vehicle speed in distance units per second.
    pub speed: f64,
    /// Clustering iteration ceiling.
    pub max_iterations: usize,
    /// Seed for the session's random source; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            point_count: 50,
            zone_count: 5,
            bounds: Bounds::default(),
            speed: DEFAULT_SPEED,
            max_iterations: MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl DispatchConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zone_count == 0 {
            return Err(ConfigError::Invalid("zoneCount must be at least 1".into()));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "speed must be positive and finite, got {}",
                self.speed
            )));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "maxIterations must be at least 1".into(),
            ));
        }
        let b = &self.bounds;
        if !(b.width > 0.0 && b.height > 0.0) || !b.width.is_finite() || !b.height.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "bounds must have positive finite extents, got {}x{}",
                b.width, b.height
            )));
        }
        if !b.margin.is_finite() || b.margin < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "bounds margin must be non-negative, got {}",
                b.margin
            )));
        }
        Ok(())
    }
}
