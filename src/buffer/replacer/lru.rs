//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use log::trace;

use crate::buffer::replacer::{Access, EvictionPolicy, PolicyKind};
use crate::buffer::FrameSet;
use crate::common::{PageId, SimConfig};

/// Evicts the page whose last access is oldest.
///
/// Recency is tracked separately from slot order: the victim is removed
/// from its slot and the incoming page is appended.
pub struct LruReplacer {
    frames: FrameSet,

    /// Resident pages by recency (front = least recently used).
    recency: VecDeque<PageId>,
}

impl LruReplacer {
    /// Create an empty replacer with `config.n_frames()` frames.
    pub fn new(config: SimConfig) -> Self {
        let capacity = config.n_frames();
        Self {
            frames: FrameSet::new(capacity),
            recency: VecDeque::with_capacity(capacity),
        }
    }

    /// Move `page` to the most-recently-used end.
    fn touch(&mut self, page: PageId) {
        if let Some(idx) = self.recency.iter().position(|&p| p == page) {
            self.recency.remove(idx);
        }
        self.recency.push_back(page);
    }
}

impl EvictionPolicy for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn frames(&self) -> &[PageId] {
        self.frames.as_slice()
    }

    fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    fn record_hit(&mut self, access: &Access<'_>) {
        self.touch(access.page());
    }

    fn admit(&mut self, access: &Access<'_>) -> Option<PageId> {
        let page = access.page();
        let mut victim = None;

        if self.frames.is_full() {
            if let Some(lru) = self.recency.pop_front() {
                if let Some(slot) = self.frames.position(lru) {
                    self.frames.remove_at(slot);
                }
                trace!("lru: evict {} for {}", lru, page);
                victim = Some(lru);
            }
        }

        self.frames.push(page);
        self.touch(page);
        victim
    }
}
