//! The resident set of pages.

use crate::common::PageId;

/// An ordered set of resident pages with a fixed capacity.
///
/// Slot order is observable: it is what a step snapshot records, and the
/// order several policies scan when breaking ties.
///
/// # Invariants
/// - `len() <= capacity()`
/// - No page appears twice
///
/// Both are checked with `debug_assert!` on every mutation. Callers
/// (the replacers) are responsible for upholding them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    /// Resident pages in slot order.
    pages: Vec<PageId>,

    /// Number of frames (immutable after construction).
    capacity: usize,
}

impl FrameSet {
    /// Create an empty frame set.
    ///
    /// Only replacers build frame sets, from an already validated
    /// [`SimConfig`](crate::SimConfig), so `capacity` is at least one.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            pages: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of frames (at least one).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// True once every frame holds a page.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pages.len() >= self.capacity
    }

    /// True iff `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.pages.contains(&page)
    }

    /// Slot index of `page`, if resident.
    pub fn position(&self, page: PageId) -> Option<usize> {
        self.pages.iter().position(|&p| p == page)
    }

    /// Page held in `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= len()`.
    #[inline]
    pub fn get(&self, slot: usize) -> PageId {
        self.pages[slot]
    }

    /// Resident pages in slot order.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    /// Iterate over resident pages in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.pages.iter()
    }

    /// Place `page` in the next free frame.
    pub fn push(&mut self, page: PageId) {
        debug_assert!(!self.is_full(), "push into a full frame set");
        debug_assert!(!self.contains(page), "page {} already resident", page);
        self.pages.push(page);
    }

    /// Overwrite `slot` in place, returning the page it held.
    pub fn replace_at(&mut self, slot: usize, page: PageId) -> PageId {
        debug_assert!(!self.contains(page), "page {} already resident", page);
        std::mem::replace(&mut self.pages[slot], page)
    }

    /// Remove `slot`, shifting later pages down by one.
    pub fn remove_at(&mut self, slot: usize) -> PageId {
        self.pages.remove(slot)
    }
}
