use mix_core::errors::{ErrorInfo, MixError};
use serde::{Deserialize, Serialize};

/// Degree of the regular topology when none is configured.
pub const DEFAULT_DEGREE: usize = 4;
/// Activation rate of every edge when none is configured.
pub const DEFAULT_POISSON_RATE: f64 = 1.0;
/// Simulated horizon when none is configured.
pub const DEFAULT_EXPERIMENT_TIME: f64 = 60.0;

/// Parameters of a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of identities, which is also the number of vertices.
    pub nodes: usize,
    /// Master seed for the topology, the tracked node and all arrival draws.
    #[serde(default)]
    pub seed: u64,
    /// Degree of the regular topology.
    #[serde(default = "default_degree")]
    pub degree: usize,
    /// Rate of the exponential inter-arrival distribution of each edge.
    #[serde(default = "default_poisson_rate")]
    pub poisson_rate: f64,
    /// Simulated time at which the run stops.
    #[serde(default = "default_experiment_time")]
    pub experiment_time: f64,
}

fn default_degree() -> usize {
    DEFAULT_DEGREE
}

fn default_poisson_rate() -> f64 {
    DEFAULT_POISSON_RATE
}

fn default_experiment_time() -> f64 {
    DEFAULT_EXPERIMENT_TIME
}

impl SimulationConfig {
    /// Creates a configuration with the default degree, rate and horizon.
    pub fn new(nodes: usize, seed: u64) -> Self {
        Self {
            nodes,
            seed,
            degree: default_degree(),
            poisson_rate: default_poisson_rate(),
            experiment_time: default_experiment_time(),
        }
    }

    /// Overrides the topology degree.
    pub fn with_degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// Overrides the per-edge activation rate.
    pub fn with_poisson_rate(mut self, rate: f64) -> Self {
        self.poisson_rate = rate;
        self
    }

    /// Overrides the simulated horizon.
    pub fn with_experiment_time(mut self, horizon: f64) -> Self {
        self.experiment_time = horizon;
        self
    }

    /// Parses a configuration from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, MixError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|err| {
            MixError::Configuration(ErrorInfo::new("config-parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that a regular topology exists for these parameters and that the
    /// rate and horizon describe a finite run.
    pub fn validate(&self) -> Result<(), MixError> {
        if self.nodes == 0 {
            return Err(MixError::Configuration(ErrorInfo::new(
                "invalid-node-count",
                "simulation requires at least one node",
            )));
        }
        if self.degree >= self.nodes {
            return Err(MixError::Configuration(
                ErrorInfo::new("degree-too-large", "degree must be smaller than the node count")
                    .with_context("degree", self.degree)
                    .with_context("nodes", self.nodes)
                    .with_hint("no simple regular graph exists when degree >= nodes"),
            ));
        }
        if (self.degree * self.nodes) % 2 != 0 {
            return Err(MixError::Configuration(
                ErrorInfo::new("odd-degree-sum", "degree * nodes must be even")
                    .with_context("degree", self.degree)
                    .with_context("nodes", self.nodes),
            ));
        }
        if !(self.poisson_rate.is_finite() && self.poisson_rate > 0.0) {
            return Err(MixError::Configuration(
                ErrorInfo::new("invalid-rate", "poisson rate must be finite and positive")
                    .with_context("poisson_rate", self.poisson_rate),
            ));
        }
        if !(self.experiment_time.is_finite() && self.experiment_time >= 0.0) {
            return Err(MixError::Configuration(
                ErrorInfo::new("invalid-horizon", "experiment time must be finite and non-negative")
                    .with_context("experiment_time", self.experiment_time),
            ));
        }
        Ok(())
    }
}
