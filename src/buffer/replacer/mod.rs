//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - First-In-First-Out
//! - [`LruReplacer`] - Least Recently Used
//! - [`OptimalReplacer`] - Belady's clairvoyant policy
//! - [`ClockReplacer`] - Second Chance (CLOCK)
//! - [`LfuReplacer`] - Least Frequently Used
//! - [`MfuReplacer`] - Most Frequently Used
//!
//! The set is closed: [`PolicyKind`] names every policy and
//! [`PolicyKind::build`] matches on it exhaustively.

mod clock;
mod fifo;
mod frequency;
mod kind;
mod lru;
mod optimal;

pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use frequency::{LfuReplacer, MfuReplacer};
pub use kind::PolicyKind;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::PageId;

/// One access of a trace, as seen by a policy.
///
/// Carries the whole trace so lookahead policies (Optimal) can inspect
/// the accesses that follow.
#[derive(Debug, Clone, Copy)]
pub struct Access<'a> {
    trace: &'a [PageId],
    position: usize,
}

impl<'a> Access<'a> {
    /// Only the runner creates accesses; `position` must index `trace`.
    pub(crate) fn new(trace: &'a [PageId], position: usize) -> Self {
        debug_assert!(position < trace.len(), "access position out of bounds");
        Self { trace, position }
    }

    /// The page being accessed.
    #[inline]
    pub fn page(&self) -> PageId {
        self.trace[self.position]
    }

    /// 0-based index of this access in the trace.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Accesses strictly after this one.
    #[inline]
    pub fn upcoming(&self) -> &'a [PageId] {
        &self.trace[self.position + 1..]
    }
}

/// Common contract of all eviction policies.
///
/// Each policy owns its frame set and private bookkeeping. The runner calls
/// exactly one of [`record_hit`](Self::record_hit) or
/// [`admit`](Self::admit) per access, in trace order.
pub trait EvictionPolicy {
    /// Which of the six policies this is.
    fn kind(&self) -> PolicyKind;

    /// Resident pages in slot order.
    fn frames(&self) -> &[PageId];

    /// Number of frames, fixed at construction.
    fn capacity(&self) -> usize;

    /// True iff `page` currently occupies a frame.
    fn is_resident(&self, page: PageId) -> bool {
        self.frames().contains(&page)
    }

    /// Update bookkeeping for an access to a resident page.
    fn record_hit(&mut self, access: &Access<'_>);

    /// Make a non-resident page resident.
    ///
    /// Appends into a free frame if there is one and returns `None`;
    /// otherwise evicts exactly one page by the policy's rule and returns it.
    fn admit(&mut self, access: &Access<'_>) -> Option<PageId>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_upcoming() {
        let trace = [PageId(1), PageId(2), PageId(3)];

        let first = Access::new(&trace, 0);
        assert_eq!(first.page(), PageId(1));
        assert_eq!(first.upcoming(), &[PageId(2), PageId(3)]);

        let last = Access::new(&trace, 2);
        assert_eq!(last.page(), PageId(3));
        assert!(last.upcoming().is_empty());
    }
}
