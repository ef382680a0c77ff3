//! Reference string parsing.

use std::collections::HashSet;
use std::str::FromStr;

use crate::common::config::FIELD_SEPARATOR;
use crate::common::{Error, PageId, Result};

/// An ordered, possibly repeating sequence of page accesses.
///
/// Immutable once parsed. The length is the number of simulated accesses.
///
/// # Example
/// ```
/// use pagesim::{PageId, ReferenceString};
///
/// let trace: ReferenceString = "7, 0, 1, 2, 0".parse().unwrap();
/// assert_eq!(trace.len(), 5);
/// assert_eq!(trace.as_slice()[0], PageId::new(7));
/// assert_eq!(trace.distinct_count(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceString {
    pages: Vec<PageId>,
}

impl ReferenceString {
    /// Parse a comma-delimited list of integers.
    ///
    /// Each field is trimmed before parsing. Input that is empty or only
    /// whitespace yields an empty sequence; an empty field anywhere else
    /// (e.g. `"1,,2"`) is malformed.
    ///
    /// # Errors
    /// - `Error::InvalidInput` naming the first field that is not an integer
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }

        let pages = input
            .split(FIELD_SEPARATOR)
            .enumerate()
            .map(|(index, field)| {
                let token = field.trim();
                token
                    .parse::<i64>()
                    .map(PageId::new)
                    .map_err(|source| Error::InvalidInput {
                        index,
                        token: token.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { pages })
    }

    /// Number of accesses.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when the trace has no accesses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages in access order.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    /// Iterate over pages in access order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.pages.iter()
    }

    /// Number of distinct pages referenced.
    pub fn distinct_count(&self) -> usize {
        self.pages.iter().collect::<HashSet<_>>().len()
    }
}

impl FromStr for ReferenceString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Vec<PageId>> for ReferenceString {
    fn from(pages: Vec<PageId>) -> Self {
        Self { pages }
    }
}

impl FromIterator<i64> for ReferenceString {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().map(PageId::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ReferenceString {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
