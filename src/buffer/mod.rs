//! Frame management and eviction policies.
//!
//! # Components
//! - [`FrameSet`] - The ordered, bounded set of resident pages
//! - [`AccessStats`] - Hit/fault/eviction counters
//! - [`replacer`] - Eviction policy implementations

mod frame_set;
pub mod replacer;
mod stats;

pub use frame_set::FrameSet;
pub use replacer::{Access, EvictionPolicy, PolicyKind};
pub use stats::AccessStats;
