//! A single animation run over a fixed route set.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::sampler::{final_positions, sample, total_duration};
use super::TickSource;
use crate::models::{Point, Route};

/// Vehicle positions at one instant of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Elapsed seconds since the run started.
    pub elapsed: f64,
    /// One position per route, in route order.
    pub positions: Vec<Point>,
    /// `true` once every route has been fully traversed.
    pub finished: bool,
}

/// One animation run: a route set travelled at a constant speed.
///
/// Holds no per-frame state; frames are recomputed from the elapsed time.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Point, Route};
/// use u_delivery::simulation::{FixedStepTicks, Simulation};
///
/// let depot = Point::new(0.0, 0.0);
/// let routes = vec![Route::new(0, vec![depot, Point::new(10.0, 0.0), depot])];
/// let sim = Simulation::new(routes, 10.0).unwrap();
/// assert_eq!(sim.total_duration(), 2.0);
///
/// let mut last = None;
/// let frames = sim.run(FixedStepTicks::new(0.5).unwrap(), |f| last = Some(f.clone()));
/// assert_eq!(frames, 5);
/// assert!(last.unwrap().finished);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    routes: Vec<Route>,
    speed: f64,
    total_duration: f64,
}

impl Simulation {
    /// Creates a run over `routes` at `speed` distance units per second.
    ///
    /// Returns `None` if `speed` is not positive and finite. With no routes
    /// the run is finished from the start.
    pub fn new(routes: Vec<Route>, speed: f64) -> Option<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return None;
        }
        let total_duration = total_duration(&routes, speed).unwrap_or(0.0);
        Some(Self {
            routes,
            speed,
            total_duration,
        })
    }

    /// Routes being travelled.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Vehicle speed.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Seconds until the longest route is complete.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Returns `true` if `elapsed` is at or past the end of the run.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.total_duration
    }

    /// Vehicle positions at `elapsed` seconds.
    pub fn frame(&self, elapsed: f64) -> Frame {
        let finished = self.is_finished(elapsed);
        let positions = if finished {
            final_positions(&self.routes)
        } else {
            sample(&self.routes, elapsed, self.speed)
        };
        Frame {
            elapsed,
            positions,
            finished,
        }
    }

    /// Drives the run from `ticks`, passing each frame to `on_frame`.
    ///
    /// Stops after the first finished frame or when `ticks` is exhausted,
    /// and returns the number of frames emitted. Elapsed values that go
    /// backwards are held at the previous value.
    pub fn run<T, F>(&self, mut ticks: T, mut on_frame: F) -> usize
    where
        T: TickSource,
        F: FnMut(&Frame),
    {
        let mut cursor = f64::NEG_INFINITY;
        let mut emitted = 0;

        while let Some(elapsed) = ticks.next_elapsed() {
            cursor = cursor.max(elapsed);
            let frame = self.frame(cursor);
            on_frame(&frame);
            emitted += 1;

            if frame.finished {
                debug!(
                    frames = emitted,
                    elapsed = cursor,
                    "simulation run finished"
                );
                break;
            }
        }

        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::FixedStepTicks;

    fn sim() -> Simulation {
        let depot = Point::new(0.0, 0.0);
        Simulation::new(
            vec![
                Route::new(0, vec![depot, Point::new(0.0, 30.0), depot]),
                Route::new(1, vec![depot, Point::new(15.0, 0.0), depot]),
            ],
            30.0,
        )
        .expect("positive speed")
    }

    #[test]
    fn test_total_duration() {
        assert!((sim().total_duration() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_frame_positions() {
        let s = sim();
        let f = s.frame(0.5);
        assert!(!f.finished);
        assert_eq!(f.positions[0], Point::new(0.0, 15.0));
        assert_eq!(f.positions[1], Point::new(15.0, 0.0));
    }

    #[test]
    fn test_terminal_frame_at_depot() {
        let f = sim().frame(2.0);
        assert!(f.finished);
        assert_eq!(f.positions, vec![Point::origin(); 2]);
    }

    #[test]
    fn test_run_stops_after_terminal_frame() {
        let s = sim();
        let mut frames = Vec::new();
        let count = s.run(FixedStepTicks::new(0.5).expect("valid"), |f| {
            frames.push(f.clone())
        });
        assert_eq!(count, 5);
        assert_eq!(frames.len(), 5);
        assert!(frames[..4].iter().all(|f| !f.finished));
        assert!(frames[4].finished);
    }

    #[test]
    fn test_run_stops_when_ticks_exhausted() {
        let s = sim();
        let count = s.run(vec![0.0, 0.25].into_iter(), |_| {});
        assert_eq!(count, 2);
    }

    #[test]
    fn test_run_holds_cursor_on_backwards_tick() {
        let s = sim();
        let mut elapsed = Vec::new();
        s.run(vec![0.0, 1.0, 0.5, 1.5].into_iter(), |f| elapsed.push(f.elapsed));
        assert_eq!(elapsed, vec![0.0, 1.0, 1.0, 1.5]);
    }

    #[test]
    fn test_empty_simulation_finishes_immediately() {
        let s = Simulation::new(Vec::new(), 150.0).expect("positive speed");
        assert!(s.is_finished(0.0));
        let count = s.run(FixedStepTicks::new(1.0).expect("valid"), |f| {
            assert!(f.positions.is_empty())
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let depot = Point::new(0.0, 0.0);
        let routes = vec![Route::new(0, vec![depot, Point::new(10.0, 0.0), depot])];
        for speed in [0.0, -2.5, f64::NAN, f64::INFINITY] {
            assert!(Simulation::new(routes.clone(), speed).is_none(), "accepted {speed}");
        }
        assert!(Simulation::new(vec![Route::new(0, vec![depot, depot])], 0.0).is_none());
    }

    #[test]
    fn test_zero_length_routes_finish_on_first_frame() {
        let depot = Point::new(2.0, 2.0);
        let s = Simulation::new(vec![Route::new(0, vec![depot, depot])], 150.0)
            .expect("positive speed");
        assert_eq!(s.total_duration(), 0.0);
        let count = s.run(FixedStepTicks::new(1.0).expect("valid"), |f| {
            assert!(f.finished);
            assert_eq!(f.positions, vec![depot]);
        });
        assert_eq!(count, 1);
    }
}
