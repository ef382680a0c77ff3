//! Comparison Aggregator - every policy over the same trace.

use std::fmt;
use std::panic;
use std::thread;

use log::debug;

use crate::buffer::PolicyKind;
use crate::common::{format_pages, PageId, Result, SimConfig};
use crate::simulation::{SimulationResult, Simulator};
use crate::trace::ReferenceString;

/// Summary of one policy's run, ready for tabular display.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Policy this row summarizes.
    pub policy: PolicyKind,

    /// Total faults over the trace.
    pub faults: u64,

    /// Hit ratio (0.0 to 1.0).
    pub hit_ratio: f64,

    /// Frames after the last access, in slot order.
    pub final_frames: Vec<PageId>,
}

impl ComparisonRow {
    /// Summarize a finished run.
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            policy: result.policy,
            faults: result.total_faults(),
            hit_ratio: result.hit_ratio(),
            final_frames: result.final_frames().to_vec(),
        }
    }

    /// Hit ratio as a percentage (0.0 to 100.0).
    pub fn hit_ratio_percent(&self) -> f64 {
        self.hit_ratio * 100.0
    }

    /// Final frames rendered as `[a, b, c]`.
    pub fn final_frames_text(&self) -> String {
        format_pages(&self.final_frames)
    }
}

impl fmt::Display for ComparisonRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: faults={}, hit_ratio={:.2}%, final={}",
            self.policy,
            self.faults,
            self.hit_ratio_percent(),
            self.final_frames_text()
        )
    }
}

fn run_one(kind: PolicyKind, trace: &ReferenceString, config: SimConfig) -> ComparisonRow {
    let row = ComparisonRow::from_result(&Simulator::new(kind, config).run(trace));
    debug!("compare: {}", row);
    row
}

/// Run every policy over `trace`, one after another.
///
/// Each policy gets a fresh instance. Rows come back in
/// [`PolicyKind::ALL`] order.
pub fn compare(trace: &ReferenceString, config: SimConfig) -> Vec<ComparisonRow> {
    PolicyKind::ALL
        .iter()
        .map(|&kind| run_one(kind, trace, config))
        .collect()
}

/// Same rows as [`compare`], with each policy on its own scoped thread.
///
/// The runs share nothing but the read-only trace. Rows are joined back in
/// [`PolicyKind::ALL`] order; a panicking worker re-panics here.
pub fn compare_parallel(trace: &ReferenceString, config: SimConfig) -> Vec<ComparisonRow> {
    thread::scope(|scope| {
        let handles: Vec<_> = PolicyKind::ALL
            .iter()
            .map(|&kind| scope.spawn(move || run_one(kind, trace, config)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
}

/// Validate the frame count, parse `input`, then compare every policy.
///
/// # Errors
/// - `Error::InvalidConfig` if `n_frames` is 0
/// - `Error::InvalidInput` if `input` has a non-integer field
pub fn compare_str(input: &str, n_frames: usize) -> Result<Vec<ComparisonRow>> {
    let config = SimConfig::new(n_frames)?;
    let trace = ReferenceString::parse(input)?;
    Ok(compare(&trace, config))
}
