//! Clocks that drive a simulation run.

/// Supplies elapsed times, in seconds, for successive simulation frames.
///
/// The simulation does not own a clock; a host drives it by implementing
/// this trait (e.g. from display refresh callbacks). Any iterator of `f64`
/// is a tick source. Returning `None` ends the run.
pub trait TickSource {
    /// Elapsed seconds since the run started, or `None` when exhausted.
    fn next_elapsed(&mut self) -> Option<f64>;
}

impl<I: Iterator<Item = f64>> TickSource for I {
    fn next_elapsed(&mut self) -> Option<f64> {
        self.next()
    }
}

/// An unbounded clock ticking at a fixed step: `0, step, 2·step, …`.
///
/// # Examples
///
/// ```
/// use u_delivery::simulation::FixedStepTicks;
///
/// let ticks: Vec<f64> = FixedStepTicks::new(0.5).unwrap().take(3).collect();
/// assert_eq!(ticks, vec![0.0, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct FixedStepTicks {
    step: f64,
    index: u64,
}

impl FixedStepTicks {
    /// Creates a clock with the given step in seconds.
    ///
    /// Returns `None` if `step` is not positive and finite.
    pub fn new(step: f64) -> Option<Self> {
        if !step.is_finite() || step <= 0.0 {
            return None;
        }
        Some(Self { step, index: 0 })
    }

    /// Creates a clock ticking `fps` times per second.
    pub fn per_second(fps: f64) -> Option<Self> {
        Self::new(1.0 / fps)
    }

    /// Step between ticks, in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Iterator for FixedStepTicks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let elapsed = self.index as f64 * self.step;
        self.index += 1;
        Some(elapsed)
    }
}
