//! Optimal (Belady) replacement policy.

use log::trace;

use crate::buffer::replacer::{Access, EvictionPolicy, PolicyKind};
use crate::buffer::FrameSet;
use crate::common::{PageId, SimConfig};

/// Evicts the page whose next use lies furthest in the future.
///
/// Frames are scanned in slot order. The first page that never recurs is
/// chosen at once and the scan stops there; it need not be the page absent
/// longest. Failing that, the page with the largest next-use index wins,
/// ties going to the earlier slot. The newcomer takes the victim's slot.
pub struct OptimalReplacer {
    frames: FrameSet,
}

impl OptimalReplacer {
    /// Create an empty replacer with `config.n_frames()` frames.
    pub fn new(config: SimConfig) -> Self {
        let capacity = config.n_frames();
        Self {
            frames: FrameSet::new(capacity),
        }
    }

    fn victim_slot(&self, upcoming: &[PageId]) -> usize {
        let mut victim = 0;
        let mut farthest: Option<usize> = None;

        for (slot, &page) in self.frames.iter().enumerate() {
            match upcoming.iter().position(|&p| p == page) {
                None => return slot,
                Some(next_use) => {
                    if farthest.map_or(true, |f| next_use > f) {
                        farthest = Some(next_use);
                        victim = slot;
                    }
                }
            }
        }
        victim
    }
}

impl EvictionPolicy for OptimalReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn frames(&self) -> &[PageId] {
        self.frames.as_slice()
    }

    fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    fn record_hit(&mut self, _access: &Access<'_>) {}

    fn admit(&mut self, access: &Access<'_>) -> Option<PageId> {
        let page = access.page();
        if !self.frames.is_full() {
            self.frames.push(page);
            return None;
        }

        let slot = self.victim_slot(access.upcoming());
        let victim = self.frames.replace_at(slot, page);
        trace!("optimal: evict {} from slot {} for {}", victim, slot, page);
        Some(victim)
    }
}
