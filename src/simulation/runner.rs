//! Simulation Runner - replays a trace through one eviction policy.

use log::debug;

use crate::buffer::{Access, AccessStats, EvictionPolicy, PolicyKind};
use crate::common::{Result, SimConfig};
use crate::simulation::{AccessOutcome, SimulationResult, Step};
use crate::trace::ReferenceString;

/// Drives a single policy instance over a trace.
///
/// `run` consumes the simulator, so policy state lives for exactly one
/// run and can never leak into another.
///
/// # Usage
/// ```
/// use pagesim::{PolicyKind, ReferenceString, SimConfig, Simulator};
///
/// let trace: ReferenceString = "1,2,3,4,1,2,5".parse()?;
/// let config = SimConfig::new(3)?;
///
/// let result = Simulator::new(PolicyKind::Optimal, config).run(&trace);
/// assert_eq!(result.total_faults(), 5);
/// # Ok::<(), pagesim::Error>(())
/// ```
pub struct Simulator {
    policy: Box<dyn EvictionPolicy>,
}

impl Simulator {
    /// Create a simulator with a fresh instance of `kind`.
    pub fn new(kind: PolicyKind, config: SimConfig) -> Self {
        Self {
            policy: kind.build(config),
        }
    }

    /// Create a simulator around an existing policy instance.
    ///
    /// Replacers are built from a [`SimConfig`], so the frame count was
    /// validated before the policy existed.
    pub fn with_policy(policy: Box<dyn EvictionPolicy>) -> Self {
        Self { policy }
    }

    /// Replay every access of `trace` in order.
    pub fn run(mut self, trace: &ReferenceString) -> SimulationResult {
        let kind = self.policy.kind();
        let n_frames = self.policy.capacity();
        debug!(
            "simulating {} over {} accesses with {} frames",
            kind,
            trace.len(),
            n_frames
        );

        let pages = trace.as_slice();
        let mut steps = Vec::with_capacity(pages.len());
        let mut stats = AccessStats::new();

        for position in 0..pages.len() {
            let access = Access::new(pages, position);
            let page = access.page();

            let outcome = if self.policy.is_resident(page) {
                self.policy.record_hit(&access);
                stats.record_hit();
                AccessOutcome::Hit
            } else {
                let evicted = self.policy.admit(&access);
                stats.record_fault(evicted.is_some());
                AccessOutcome::Fault { evicted }
            };

            debug_assert!(self.policy.frames().len() <= n_frames);
            steps.push(Step {
                position,
                page,
                frames: self.policy.frames().to_vec(),
                outcome,
            });
        }

        debug!("{} finished: {}", kind, stats);
        SimulationResult {
            policy: kind,
            n_frames,
            steps,
            stats,
        }
    }
}

/// Validate the frame count and run `kind` over `trace`.
///
/// # Errors
/// - `Error::InvalidConfig` if `n_frames` is 0
pub fn simulate(
    kind: PolicyKind,
    trace: &ReferenceString,
    n_frames: usize,
) -> Result<SimulationResult> {
    let config = SimConfig::new(n_frames)?;
    Ok(Simulator::new(kind, config).run(trace))
}

/// Validate the frame count, parse `input`, then run `kind` over it.
///
/// Configuration is checked first, so a bad frame count is reported
/// whatever the input looks like.
///
/// # Errors
/// - `Error::InvalidConfig` if `n_frames` is 0
/// - `Error::InvalidInput` if `input` has a non-integer field
pub fn simulate_str(kind: PolicyKind, input: &str, n_frames: usize) -> Result<SimulationResult> {
    let config = SimConfig::new(n_frames)?;
    let trace = ReferenceString::parse(input)?;
    Ok(Simulator::new(kind, config).run(&trace))
}
