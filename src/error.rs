//! Error types for the staged dispatch pipeline.
//!
//! The geometric core never fails; these cover host-level preconditions
//! and configuration.

use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`DispatchConfig`](crate::config::DispatchConfig).
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A pipeline stage was requested before its inputs exist.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Clustering requested with no generated points.
    #[error("no delivery points generated yet; generate points first")]
    NoPoints,

    /// Routing requested before clustering.
    #[error("no zones computed yet; cluster the points first")]
    NoZones,

    /// Simulation requested before routing.
    #[error("no routes computed yet; calculate routes first")]
    NoRoutes,

    /// Zone count outside `1..=points`.
    #[error("zone count {k} must be between 1 and the number of points ({points})")]
    InvalidZoneCount {
        /// Requested zone count.
        k: usize,
        /// Number of available points.
        points: usize,
    },

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
