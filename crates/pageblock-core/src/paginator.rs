//! Reusable paginator with fixed page and block sizes.

use serde::{Deserialize, Serialize};

use crate::compute::PaginationInput;
use crate::error::{PaginationError, Result};
use crate::result::PaginationResult;

/// Paginator holding validated page and block sizes.
///
/// Build one per listing style and call [`paginate`](Self::paginate) for
/// every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPaginator")]
pub struct Paginator {
    entries_per_page: i64,
    pages_per_block: i64,
}

impl Paginator {
    /// Default entries per page.
    pub const DEFAULT_ENTRIES_PER_PAGE: i64 = 10;

    /// Default pages per block.
    pub const DEFAULT_PAGES_PER_BLOCK: i64 = 10;

    /// Create a paginator, rejecting sizes below 1.
    pub fn new(entries_per_page: i64, pages_per_block: i64) -> Result<Self> {
        Ok(Self {
            entries_per_page: PaginationError::check_divisor("entries_per_page", entries_per_page)?,
            pages_per_block: PaginationError::check_divisor("pages_per_block", pages_per_block)?,
        })
    }

    /// Replace the page size.
    pub fn with_entries_per_page(self, entries_per_page: i64) -> Result<Self> {
        Self::new(entries_per_page, self.pages_per_block)
    }

    /// Replace the block size.
    pub fn with_pages_per_block(self, pages_per_block: i64) -> Result<Self> {
        Self::new(self.entries_per_page, pages_per_block)
    }

    /// Entries shown on one page.
    pub fn entries_per_page(&self) -> i64 {
        self.entries_per_page
    }

    /// Pages grouped into one navigation block.
    pub fn pages_per_block(&self) -> i64 {
        self.pages_per_block
    }

    /// Compute the metadata for `requested_page` of a listing.
    pub fn paginate(&self, total_entries: i64, requested_page: i64) -> Result<PaginationResult> {
        PaginationInput::new(
            total_entries,
            self.entries_per_page,
            self.pages_per_block,
            requested_page,
        )
        .compute()
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            entries_per_page: Self::DEFAULT_ENTRIES_PER_PAGE,
            pages_per_block: Self::DEFAULT_PAGES_PER_BLOCK,
        }
    }
}

#[derive(Deserialize)]
struct RawPaginator {
    entries_per_page: i64,
    pages_per_block: i64,
}

impl TryFrom<RawPaginator> for Paginator {
    type Error = PaginationError;

    fn try_from(raw: RawPaginator) -> Result<Self> {
        Self::new(raw.entries_per_page, raw.pages_per_block)
    }
}
