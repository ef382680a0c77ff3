//! Per-access snapshots and run results.

use std::fmt;

use crate::buffer::{AccessStats, PolicyKind};
use crate::common::{format_pages, PageId};

/// Whether an access hit or faulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was already resident.
    Hit,
    /// The page was admitted, displacing `evicted` if the frames were full.
    Fault { evicted: Option<PageId> },
}

/// Snapshot taken after processing one access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 0-based index in the trace.
    pub position: usize,

    /// Page accessed.
    pub page: PageId,

    /// Frame contents after the access, in slot order.
    pub frames: Vec<PageId>,

    /// Hit or fault, with the evicted page on a fault.
    pub outcome: AccessOutcome,
}

impl Step {
    /// True if the page had to be admitted.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self.outcome, AccessOutcome::Fault { .. })
    }

    /// True if the page was already resident.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.outcome == AccessOutcome::Hit
    }

    /// Page displaced by this access, if any.
    pub fn evicted(&self) -> Option<PageId> {
        match self.outcome {
            AccessOutcome::Fault { evicted } => evicted,
            AccessOutcome::Hit => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {}: Page {} -> Frames: {} ({})",
            self.position + 1,
            self.page,
            format_pages(&self.frames),
            if self.is_fault() { "Page Fault" } else { "Page Hit" }
        )
    }
}

/// Outcome of replaying a whole trace through one policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Policy that produced the run.
    pub policy: PolicyKind,

    /// Frame capacity of the run.
    pub n_frames: usize,

    /// One entry per access, in trace order.
    pub steps: Vec<Step>,

    /// Hit, fault and eviction totals.
    pub stats: AccessStats,
}

impl SimulationResult {
    /// Number of accesses replayed.
    pub fn total_accesses(&self) -> usize {
        self.steps.len()
    }

    /// Number of fault steps.
    pub fn total_faults(&self) -> u64 {
        self.stats.faults
    }

    /// Hit ratio (0.0 to 1.0), zero for an empty trace.
    pub fn hit_ratio(&self) -> f64 {
        self.stats.hit_ratio()
    }

    /// Hit ratio as a percentage (0.0 to 100.0).
    pub fn hit_ratio_percent(&self) -> f64 {
        self.stats.hit_ratio_percent()
    }

    /// Frames after the last access; empty when nothing was accessed.
    pub fn final_frames(&self) -> &[PageId] {
        self.steps
            .last()
            .map(|step| step.frames.as_slice())
            .unwrap_or(&[])
    }
}
