//! Frequency-based replacement policies: LFU and MFU.
//!
//! Both keep one global access counter per page, never reset, bumped on
//! every access including the faulting access itself before a victim is
//! picked. They differ only in which extreme they evict.

use std::collections::HashMap;

use log::trace;

use crate::buffer::replacer::{Access, EvictionPolicy, PolicyKind};
use crate::buffer::FrameSet;
use crate::common::{PageId, SimConfig};

/// Frames plus access counters, shared by LFU and MFU.
struct FrequencyTable {
    frames: FrameSet,

    /// Accesses per page over the whole run, resident or not.
    counts: HashMap<PageId, u64>,
}

impl FrequencyTable {
    fn new(capacity: usize) -> Self {
        Self {
            frames: FrameSet::new(capacity),
            counts: HashMap::new(),
        }
    }

    fn bump(&mut self, page: PageId) {
        *self.counts.entry(page).or_insert(0) += 1;
    }

    fn count(&self, page: PageId) -> u64 {
        self.counts.get(&page).copied().unwrap_or(0)
    }

    /// First slot whose count beats every earlier one under `better`.
    ///
    /// `better` must be strict so ties keep the earliest slot.
    fn select(&self, better: impl Fn(u64, u64) -> bool) -> usize {
        let mut best_slot = 0;
        let mut best_count = self.count(self.frames.get(0));
        for (slot, &page) in self.frames.iter().enumerate().skip(1) {
            let count = self.count(page);
            if better(count, best_count) {
                best_slot = slot;
                best_count = count;
            }
        }
        best_slot
    }

    fn admit(
        &mut self,
        kind: PolicyKind,
        page: PageId,
        better: impl Fn(u64, u64) -> bool,
    ) -> Option<PageId> {
        self.bump(page);
        if !self.frames.is_full() {
            self.frames.push(page);
            return None;
        }

        let slot = self.select(better);
        let victim = self.frames.replace_at(slot, page);
        trace!(
            "{}: evict {} (count {}) for {}",
            kind,
            victim,
            self.count(victim),
            page
        );
        Some(victim)
    }
}

/// Evicts the resident page with the fewest accesses.
///
/// Ties go to the first such page in slot order; the newcomer takes the
/// victim's slot.
pub struct LfuReplacer {
    table: FrequencyTable,
}

impl LfuReplacer {
    /// Create an empty replacer with `config.n_frames()` frames.
    pub fn new(config: SimConfig) -> Self {
        let capacity = config.n_frames();
        Self {
            table: FrequencyTable::new(capacity),
        }
    }

    /// Accesses seen so far for `page`.
    pub fn frequency(&self, page: PageId) -> u64 {
        self.table.count(page)
    }
}

impl EvictionPolicy for LfuReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    fn frames(&self) -> &[PageId] {
        self.table.frames.as_slice()
    }

    fn capacity(&self) -> usize {
        self.table.frames.capacity()
    }

    fn record_hit(&mut self, access: &Access<'_>) {
        self.table.bump(access.page());
    }

    fn admit(&mut self, access: &Access<'_>) -> Option<PageId> {
        self.table
            .admit(PolicyKind::Lfu, access.page(), |count, best| count < best)
    }
}

/// Evicts the resident page with the most accesses.
///
/// Same counting and tie-breaking as [`LfuReplacer`], inverted comparison.
pub struct MfuReplacer {
    table: FrequencyTable,
}

impl MfuReplacer {
    /// Create an empty replacer with `config.n_frames()` frames.
    pub fn new(config: SimConfig) -> Self {
        let capacity = config.n_frames();
        Self {
            table: FrequencyTable::new(capacity),
        }
    }

    /// Accesses seen so far for `page`.
    pub fn frequency(&self, page: PageId) -> u64 {
        self.table.count(page)
    }
}

impl EvictionPolicy for MfuReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mfu
    }

    fn frames(&self) -> &[PageId] {
        self.table.frames.as_slice()
    }

    fn capacity(&self) -> usize {
        self.table.frames.capacity()
    }

    fn record_hit(&mut self, access: &Access<'_>) {
        self.table.bump(access.page());
    }

    fn admit(&mut self, access: &Access<'_>) -> Option<PageId> {
        self.table
            .admit(PolicyKind::Mfu, access.page(), |count, best| count > best)
    }
}
