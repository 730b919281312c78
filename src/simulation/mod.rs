//! Time-driven sampling of vehicle positions along route paths.
//!
//! - [`sample`] — Positions of every vehicle at one elapsed time
//! - [`total_duration`] — Time until the longest route is fully traversed
//! - [`Simulation`] — One animation run over a fixed set of routes
//! - [`TickSource`] — External clock that supplies elapsed times

mod run;
mod sampler;
mod ticks;

pub use run::{Frame, Simulation};
pub use sampler::{sample, total_duration, DEFAULT_SPEED};
pub use ticks::{FixedStepTicks, TickSource};
