//! pagesim - A deterministic page replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  "1,2,3,4,1,2,5"                                                │
//! │        ↓                                                        │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Trace (trace/) → ReferenceString              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Simulation (simulation/)  Simulator + compare      │   │
//! │  │         Step snapshots → SimulationResult → rows         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Frames (buffer/)                          │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  FIFO | LRU | Optimal | Second Chance | LFU | MFU │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │          FrameSet + AccessStats                          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`trace`] - Reference string parsing
//! - [`buffer`] - Frame sets and eviction policies
//! - [`simulation`] - Runner and comparison aggregator
//!
//! # Quick Start
//! ```
//! use pagesim::{compare_str, simulate_str, PolicyKind};
//!
//! let result = simulate_str(PolicyKind::Lru, "7,0,1,2,0,3,0,4", 3)?;
//! for step in &result.steps {
//!     println!("{}", step);
//! }
//! println!("faults: {}", result.total_faults());
//!
//! for row in compare_str("1,2,3,4,1,2,5", 3)? {
//!     println!("{}", row);
//! }
//! # Ok::<(), pagesim::Error>(())
//! ```

pub mod buffer;
pub mod common;
pub mod simulation;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result, SimConfig};

pub use buffer::{AccessStats, EvictionPolicy, FrameSet, PolicyKind};
pub use simulation::{
    compare, compare_parallel, compare_str, simulate, simulate_str, AccessOutcome,
    ComparisonRow, SimulationResult, Simulator, Step,
};
pub use trace::ReferenceString;
