use mix_core::errors::{ErrorInfo, MixError};
use mix_core::rng::ENGINE_SUBSTREAM;
use mix_core::{NodeId, RandomSource, RngHandle, Topology, TopologyProvider};
use mix_graph::{canonical_hash, check_regular, RandomRegularGraphs};
use tracing::{debug, info, trace};

use crate::clock::SimulationClock;
use crate::config::SimulationConfig;
use crate::event::Event;
use crate::frequency::NeighborFrequencyTable;
use crate::permutation::PermutationState;
use crate::queue::EventQueue;
use crate::report::SimulationReport;

/// Lifecycle of a [`Simulation`]. Transitions are strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationPhase {
    /// Building the topology and seeding the queue.
    Initializing,
    /// Popping and applying activations.
    Running,
    /// Horizon reached or queue drained; neighbours not sampled yet.
    Finalizing,
    /// Report available.
    Done,
}

/// Result of a single [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The event was applied and its edge rescheduled.
    Applied(Event),
    /// The event lay at or beyond the horizon and was dropped.
    HorizonReached(Event),
    /// The queue held no event (edgeless topology).
    Drained,
}

/// Single-run engine owning the topology, permutation, queue, clock and
/// random source.
pub struct Simulation<R: RandomSource = RngHandle> {
    config: SimulationConfig,
    graph: Box<dyn Topology>,
    graph_hash: String,
    permutation: PermutationState,
    queue: EventQueue,
    clock: SimulationClock,
    rng: R,
    tracked: NodeId,
    swaps: u64,
    phase: SimulationPhase,
    report: Option<SimulationReport>,
}

impl Simulation<RngHandle> {
    /// Builds a simulation on a random regular graph, with the engine draws
    /// taken from a substream of `config.seed`.
    pub fn from_config(config: SimulationConfig) -> Result<Self, MixError> {
        let rng = RngHandle::substream(config.seed, ENGINE_SUBSTREAM);
        Self::new(config, &RandomRegularGraphs::default(), rng)
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Validates the configuration, obtains the topology, draws the tracked
    /// node and schedules one activation per edge.
    pub fn new(
        config: SimulationConfig,
        provider: &dyn TopologyProvider,
        mut rng: R,
    ) -> Result<Self, MixError> {
        config.validate()?;
        let graph = provider.generate(config.degree, config.nodes, config.seed)?;
        check_regular(graph.as_ref(), config.degree, config.nodes)?;
        let graph_hash = canonical_hash(graph.as_ref());

        let tracked = NodeId::from_index(rng.uniform_index(config.nodes)?);
        let clock = SimulationClock::new(config.experiment_time)?;
        let mut queue = EventQueue::new();
        let edges = graph.edges();
        for &(u, v) in &edges {
            let delay = draw_delay(&mut rng, config.poisson_rate)?;
            queue.schedule(Event::new(delay, u, v)?);
        }
        debug!(
            nodes = config.nodes,
            degree = config.degree,
            edges = edges.len(),
            tracked = tracked.as_raw(),
            graph_hash = %graph_hash,
            "simulation initialized"
        );

        Ok(Self {
            permutation: PermutationState::identity(config.nodes),
            config,
            graph,
            graph_hash,
            queue,
            clock,
            rng,
            tracked,
            swaps: 0,
            phase: SimulationPhase::Running,
            report: None,
        })
    }

    /// Pops the earliest event and either applies it or stops at the horizon.
    pub fn step(&mut self) -> Result<StepOutcome, MixError> {
        if self.phase != SimulationPhase::Running {
            return Err(self.wrong_phase("step"));
        }
        if self.queue.is_empty() {
            self.phase = SimulationPhase::Finalizing;
            return Ok(StepOutcome::Drained);
        }

        let event = self.queue.pop_earliest()?;
        self.clock.advance_to(event.time())?;
        if self.clock.horizon_reached() {
            self.phase = SimulationPhase::Finalizing;
            return Ok(StepOutcome::HorizonReached(event));
        }

        self.permutation
            .swap(event.from_vertex(), event.to_vertex())?;
        self.swaps += 1;
        trace!(
            time = event.time(),
            from = event.from_vertex().as_raw(),
            to = event.to_vertex().as_raw(),
            swaps = self.swaps,
            "edge activated"
        );

        let delay = draw_delay(&mut self.rng, self.config.poisson_rate)?;
        self.queue
            .schedule(event.reactivated_at(self.clock.current_time() + delay)?);
        Ok(StepOutcome::Applied(event))
    }

    /// Runs to completion and returns the report. Calling it again after the
    /// run finished returns the same report.
    pub fn run(&mut self) -> Result<&SimulationReport, MixError> {
        while self.phase == SimulationPhase::Running {
            self.step()?;
        }
        if self.phase == SimulationPhase::Finalizing {
            self.finalize()?;
        }
        self.report.as_ref().ok_or_else(|| self.wrong_phase("run"))
    }

    /// Samples the identities around the tracked node. Only valid once the
    /// run loop has stopped.
    pub fn finalize(&mut self) -> Result<&SimulationReport, MixError> {
        if self.phase != SimulationPhase::Finalizing {
            return Err(self.wrong_phase("finalize"));
        }
        self.permutation.check_consistency()?;

        let mut frequencies = NeighborFrequencyTable::new(self.config.nodes);
        let tracked_vertex = self.permutation.vertex_for(self.tracked)?;
        for &vertex in self.graph.neighbors(tracked_vertex)? {
            frequencies.record(self.permutation.node_for(vertex)?)?;
        }

        let report = SimulationReport {
            config: self.config.clone(),
            tracked_node: self.tracked,
            neighbor_frequencies: frequencies,
            swaps: self.swaps,
            final_time: self.clock.current_time(),
            events_scheduled: self.queue.scheduled_total(),
            graph_hash: self.graph_hash.clone(),
        };
        info!(
            seed = self.config.seed,
            tracked = self.tracked.as_raw(),
            swaps = self.swaps,
            final_time = report.final_time,
            "simulation finished"
        );
        self.phase = SimulationPhase::Done;
        Ok(self.report.insert(report))
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SimulationPhase {
        self.phase
    }

    /// Configuration the run was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Identity whose neighbourhood is sampled at the end.
    pub fn tracked_node(&self) -> NodeId {
        self.tracked
    }

    /// Time of the most recently popped event.
    pub fn current_time(&self) -> f64 {
        self.clock.current_time()
    }

    /// Number of swaps applied so far.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Fixed topology of the run.
    pub fn topology(&self) -> &dyn Topology {
        self.graph.as_ref()
    }

    /// Current vertex/identity placement.
    pub fn permutation(&self) -> &PermutationState {
        &self.permutation
    }

    /// Number of pending activations.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Report of a finished run.
    pub fn report(&self) -> Option<&SimulationReport> {
        self.report.as_ref()
    }

    fn wrong_phase(&self, operation: &str) -> MixError {
        MixError::InvariantViolation(
            ErrorInfo::new("wrong-phase", "operation not allowed in the current phase")
                .with_context("operation", operation)
                .with_context("phase", format!("{:?}", self.phase)),
        )
    }
}

impl<R: RandomSource> std::fmt::Debug for Simulation<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("tracked", &self.tracked)
            .field("current_time", &self.clock.current_time())
            .field("swaps", &self.swaps)
            .finish_non_exhaustive()
    }
}

/// Runs one simulation on a random regular graph and returns its report.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationReport, MixError> {
    let mut simulation = Simulation::from_config(config.clone())?;
    simulation.run().cloned()
}

fn draw_delay<R: RandomSource>(rng: &mut R, rate: f64) -> Result<f64, MixError> {
    let delay = rng.exponential(rate)?;
    if !(delay.is_finite() && delay >= 0.0) {
        return Err(MixError::InvariantViolation(
            ErrorInfo::new("invalid-delay", "inter-arrival delay must be finite and non-negative")
                .with_context("delay", delay)
                .with_context("rate", rate),
        ));
    }
    Ok(delay)
}
