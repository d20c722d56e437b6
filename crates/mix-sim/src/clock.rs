use mix_core::errors::{ErrorInfo, MixError};

/// Current simulated time together with the experiment horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    current_time: f64,
    horizon: f64,
}

impl SimulationClock {
    /// Starts a clock at time zero.
    pub fn new(horizon: f64) -> Result<Self, MixError> {
        if !(horizon.is_finite() && horizon >= 0.0) {
            return Err(MixError::Configuration(
                ErrorInfo::new("invalid-horizon", "horizon must be finite and non-negative")
                    .with_context("horizon", horizon),
            ));
        }
        Ok(Self {
            current_time: 0.0,
            horizon,
        })
    }

    /// Time of the most recently popped event, or zero before the first pop.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Time at which the run stops.
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Moves the clock forward. Time never runs backwards.
    pub fn advance_to(&mut self, time: f64) -> Result<(), MixError> {
        if time.is_nan() || time < self.current_time {
            return Err(MixError::InvariantViolation(
                ErrorInfo::new("clock-regression", "popped event lies before current time")
                    .with_context("current_time", self.current_time)
                    .with_context("event_time", time),
            ));
        }
        self.current_time = time;
        Ok(())
    }

    /// Returns `true` once the current time has reached the horizon.
    pub fn horizon_reached(&self) -> bool {
        self.current_time >= self.horizon
    }
}
