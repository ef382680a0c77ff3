//! FIFO (First-In-First-Out) replacement policy.

use log::trace;

use crate::buffer::replacer::{Access, EvictionPolicy, PolicyKind};
use crate::buffer::FrameSet;
use crate::common::{PageId, SimConfig};

/// Evicts the page that has been resident longest.
///
/// Pages are always appended, so slot order is insertion order and the
/// victim is slot 0. Hits do not reorder anything.
pub struct FifoReplacer {
    frames: FrameSet,
}

impl FifoReplacer {
    /// Create an empty replacer with `config.n_frames()` frames.
    pub fn new(config: SimConfig) -> Self {
        let capacity = config.n_frames();
        Self {
            frames: FrameSet::new(capacity),
        }
    }
}

impl EvictionPolicy for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn frames(&self) -> &[PageId] {
        self.frames.as_slice()
    }

    fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    fn record_hit(&mut self, _access: &Access<'_>) {}

    fn admit(&mut self, access: &Access<'_>) -> Option<PageId> {
        let victim = if self.frames.is_full() {
            let victim = self.frames.remove_at(0);
            trace!("fifo: evict {} for {}", victim, access.page());
            Some(victim)
        } else {
            None
        };
        self.frames.push(access.page());
        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::replacer::test_util::{config, evictions, replay};

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new(config(3));

        let steps = replay(&mut replacer, &[1, 2, 3, 4, 5]);

        assert_eq!(steps[2], vec![1, 2, 3]);
        assert_eq!(steps[3], vec![2, 3, 4]);
        assert_eq!(steps[4], vec![3, 4, 5]);
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = FifoReplacer::new(config(2));

        // 1 is hit again but was still loaded first, so it goes first
        let evicted = evictions(&mut replacer, &[1, 2, 1, 3, 4]);

        assert_eq!(evicted, vec![None, None, None, Some(1), Some(2)]);
    }

    #[test]
    fn test_fifo_single_frame() {
        let mut replacer = FifoReplacer::new(config(1));

        let evicted = evictions(&mut replacer, &[5, 5, 6]);

        assert_eq!(evicted, vec![None, None, Some(5)]);
        assert_eq!(replacer.frames(), &[PageId(6)]);
    }
}
