//! Trace simulation.
//!
//! # Components
//! - [`Simulator`] - Replays a trace through one policy
//! - [`Step`] / [`SimulationResult`] - Per-access snapshots and totals
//! - [`compare`] / [`compare_parallel`] - All six policies side by side

mod compare;
mod runner;
mod step;

pub use compare::{compare, compare_parallel, compare_str, ComparisonRow};
pub use runner::{simulate, simulate_str, Simulator};
pub use step::{AccessOutcome, SimulationResult, Step};
