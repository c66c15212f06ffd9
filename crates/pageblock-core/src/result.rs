//! The computed pagination record.

use std::fmt;
use std::ops::{Range, RangeInclusive};

use serde::Serialize;

use crate::compute::{derive, PaginationInput};

/// Pagination metadata for one page of a listing.
///
/// Built once by [`compute`](crate::compute) or
/// [`Paginator::paginate`](crate::Paginator::paginate) and never mutated.
/// Use [`with_page`](Self::with_page) to move to another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PaginationResult {
    // Statistics
    pub(crate) total_entries: i64,
    pub(crate) entries_per_page: i64,
    pub(crate) pages_per_block: i64,

    // Page control
    pub(crate) total_pages: i64,
    pub(crate) current_page: i64,
    pub(crate) prev_page: Option<i64>,
    pub(crate) next_page: Option<i64>,

    // Block control
    pub(crate) start_of_block: i64,
    pub(crate) end_of_block: i64,
    pub(crate) prev_block_page: Option<i64>,
    pub(crate) next_block_page: Option<i64>,

    // Slice params, zero-based and inclusive
    pub(crate) start_of_slice: i64,
    pub(crate) end_of_slice: i64,
    pub(crate) length_of_slice: i64,
}

impl PaginationResult {
    /// Number of entries in the whole listing.
    pub fn total_entries(&self) -> i64 {
        self.total_entries
    }

    /// Entries shown on one page.
    pub fn entries_per_page(&self) -> i64 {
        self.entries_per_page
    }

    /// Pages grouped into one navigation block.
    pub fn pages_per_block(&self) -> i64 {
        self.pages_per_block
    }

    /// Number of pages, always at least 1.
    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// The requested page clamped into `1..=total_pages`.
    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    /// Page before the current one, if any.
    pub fn prev_page(&self) -> Option<i64> {
        self.prev_page
    }

    /// Page after the current one, if any.
    pub fn next_page(&self) -> Option<i64> {
        self.next_page
    }

    /// First page of the block containing the current page.
    pub fn start_of_block(&self) -> i64 {
        self.start_of_block
    }

    /// Last page of the block containing the current page.
    pub fn end_of_block(&self) -> i64 {
        self.end_of_block
    }

    /// Last page of the previous block, if any.
    pub fn prev_block_page(&self) -> Option<i64> {
        self.prev_block_page
    }

    /// First page of the next block, if any.
    pub fn next_block_page(&self) -> Option<i64> {
        self.next_block_page
    }

    /// Zero-based index of the first entry on the current page.
    pub fn start_of_slice(&self) -> i64 {
        self.start_of_slice
    }

    /// Zero-based index of the last entry on the current page.
    pub fn end_of_slice(&self) -> i64 {
        self.end_of_slice
    }

    /// Number of entries on the current page.
    pub fn length_of_slice(&self) -> i64 {
        self.length_of_slice
    }

    /// `OFFSET` for a bounded query.
    pub fn offset(&self) -> i64 {
        self.start_of_slice
    }

    /// `LIMIT` for a bounded query.
    pub fn limit(&self) -> i64 {
        self.length_of_slice
    }

    /// Half-open index range of the current page's entries.
    pub fn slice_range(&self) -> Range<usize> {
        let start = usize::try_from(self.start_of_slice).unwrap_or(usize::MAX);
        let end = usize::try_from(self.end_of_slice)
            .map_or(usize::MAX, |end| end.saturating_add(1));
        start..end
    }

    /// The current page of an in-memory listing.
    ///
    /// The range is cut to `items.len()`, so a listing shorter than
    /// `total_entries` yields a short or empty page rather than panicking.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.slice_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Page numbers of the current block, for rendering page links.
    pub fn block_pages(&self) -> RangeInclusive<i64> {
        self.start_of_block..=self.end_of_block
    }

    /// Whether the current page is page 1.
    pub fn is_first_page(&self) -> bool {
        self.prev_page.is_none()
    }

    /// Whether the current page is the last page.
    pub fn is_last_page(&self) -> bool {
        self.next_page.is_none()
    }

    /// Whether a block precedes the current one.
    pub fn has_prev_block(&self) -> bool {
        self.prev_block_page.is_some()
    }

    /// Whether a block follows the current one.
    pub fn has_next_block(&self) -> bool {
        self.next_block_page.is_some()
    }

    /// Recompute for another page of the same listing.
    pub fn with_page(&self, requested_page: i64) -> PaginationResult {
        derive(&PaginationInput::new(
            self.total_entries,
            self.entries_per_page,
            self.pages_per_block,
            requested_page,
        ))
    }
}

impl fmt::Display for PaginationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {}/{}, block {}-{}, entries {}-{}",
            self.current_page,
            self.total_pages,
            self.start_of_block,
            self.end_of_block,
            self.start_of_slice,
            self.end_of_slice,
        )
    }
}
