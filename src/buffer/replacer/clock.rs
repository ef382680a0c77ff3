//! CLOCK (Second Chance) replacement policy.

use log::trace;

use crate::buffer::replacer::{Access, EvictionPolicy, PolicyKind};
use crate::buffer::FrameSet;
use crate::common::{PageId, SimConfig};

/// Second Chance eviction with a persistent clock hand.
///
/// Each slot carries a reference bit. On a full frame set the hand sweeps
/// forward: a set bit is cleared and the slot skipped, the first clear bit
/// is evicted. The newcomer takes that slot with its bit set and the hand
/// moves one past it.
///
/// ```text
///      hand
///        ↓
///   [ 3:1 ][ 5:0 ][ 8:1 ]   admit 9 → clear 3, evict 5
///   [ 3:0 ][ 9:1 ][ 8:1 ]   hand now at slot 2
/// ```
pub struct ClockReplacer {
    frames: FrameSet,

    /// Reference bit per slot, parallel to `frames`.
    ref_bits: Vec<bool>,

    /// Next slot to inspect. Stays at 0 until the frames fill up.
    hand: usize,
}

impl ClockReplacer {
    /// Create an empty replacer with `config.n_frames()` frames.
    pub fn new(config: SimConfig) -> Self {
        let capacity = config.n_frames();
        Self {
            frames: FrameSet::new(capacity),
            ref_bits: Vec::with_capacity(capacity),
            hand: 0,
        }
    }

    /// Current clock hand position.
    pub fn hand(&self) -> usize {
        self.hand
    }

    /// Reference bit of a resident page.
    pub fn reference_bit(&self, page: PageId) -> Option<bool> {
        self.frames.position(page).map(|slot| self.ref_bits[slot])
    }

    fn advance(&mut self) {
        self.hand = (self.hand + 1) % self.frames.capacity();
    }
}

impl EvictionPolicy for ClockReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::SecondChance
    }

    fn frames(&self) -> &[PageId] {
        self.frames.as_slice()
    }

    fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    fn record_hit(&mut self, access: &Access<'_>) {
        if let Some(slot) = self.frames.position(access.page()) {
            self.ref_bits[slot] = true;
        }
    }

    fn admit(&mut self, access: &Access<'_>) -> Option<PageId> {
        let page = access.page();
        if !self.frames.is_full() {
            self.frames.push(page);
            self.ref_bits.push(true);
            return None;
        }

        // Terminates within one full sweep: every skipped bit is cleared.
        while self.ref_bits[self.hand] {
            trace!("clock: second chance for {}", self.frames.get(self.hand));
            self.ref_bits[self.hand] = false;
            self.advance();
        }

        let slot = self.hand;
        let victim = self.frames.replace_at(slot, page);
        self.ref_bits[slot] = true;
        self.advance();
        trace!("clock: evict {} from slot {} for {}", victim, slot, page);
        Some(victim)
    }
}
