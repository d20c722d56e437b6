use mix_core::errors::{ErrorInfo, MixError};
use mix_core::VertexId;
use serde::{Deserialize, Serialize};

/// Activation of the edge `(from_vertex, to_vertex)` at simulated `time`.
///
/// Events carry no ordering of their own; [`EventQueue`](crate::EventQueue)
/// orders them by time and breaks ties by insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    time: f64,
    from_vertex: VertexId,
    to_vertex: VertexId,
}

impl Event {
    /// Creates an event, rejecting NaN, infinite and negative times.
    pub fn new(time: f64, from_vertex: VertexId, to_vertex: VertexId) -> Result<Self, MixError> {
        if !(time.is_finite() && time >= 0.0) {
            return Err(MixError::InvariantViolation(
                ErrorInfo::new("invalid-event-time", "event time must be finite and non-negative")
                    .with_context("time", time)
                    .with_context("from_vertex", from_vertex.as_raw())
                    .with_context("to_vertex", to_vertex.as_raw()),
            ));
        }
        Ok(Self {
            time,
            from_vertex,
            to_vertex,
        })
    }

    /// Simulated activation time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// First endpoint of the activated edge.
    pub fn from_vertex(&self) -> VertexId {
        self.from_vertex
    }

    /// Second endpoint of the activated edge.
    pub fn to_vertex(&self) -> VertexId {
        self.to_vertex
    }

    /// Returns the same edge activated again at `time`.
    pub fn reactivated_at(&self, time: f64) -> Result<Self, MixError> {
        Self::new(time, self.from_vertex, self.to_vertex)
    }
}
