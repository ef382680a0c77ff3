//! Page identifier type.

use std::fmt;

/// Identifies a page in a reference trace.
///
/// Pages are opaque: the simulator only compares and hashes them.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert_eq!(page_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render pages as `[a, b, c]`.
pub(crate) fn format_pages(pages: &[PageId]) -> String {
    let inner: Vec<String> = pages.iter().map(PageId::to_string).collect();
    format!("[{}]", inner.join(", "))
}
