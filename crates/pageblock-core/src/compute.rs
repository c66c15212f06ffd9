//! The pagination computation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PaginationError, Result};
use crate::result::PaginationResult;

/// Inputs to a single pagination computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationInput {
    /// Number of entries in the whole listing.
    pub total_entries: i64,
    /// Entries shown on one page.
    pub entries_per_page: i64,
    /// Pages grouped into one navigation block.
    pub pages_per_block: i64,
    /// Page the caller asked for. Any value; clamped during computation.
    pub requested_page: i64,
}

impl PaginationInput {
    /// Create a new input tuple.
    pub fn new(
        total_entries: i64,
        entries_per_page: i64,
        pages_per_block: i64,
        requested_page: i64,
    ) -> Self {
        Self {
            total_entries,
            entries_per_page,
            pages_per_block,
            requested_page,
        }
    }

    /// Check that the counts are usable.
    pub fn validate(&self) -> Result<()> {
        PaginationError::check_divisor("entries_per_page", self.entries_per_page)?;
        PaginationError::check_divisor("pages_per_block", self.pages_per_block)?;
        if self.total_entries < 1 {
            return Err(PaginationError::NonPositiveTotal {
                total_entries: self.total_entries,
            });
        }
        Ok(())
    }

    /// Validate and compute the pagination metadata.
    pub fn compute(&self) -> Result<PaginationResult> {
        self.validate()?;
        Ok(derive(self))
    }
}

/// Compute pagination metadata from the four raw inputs.
///
/// ```
/// let page = pageblock_core::compute(200, 10, 5, 7).unwrap();
/// assert_eq!(page.total_pages(), 20);
/// assert_eq!(page.block_pages(), 6..=10);
/// assert_eq!((page.offset(), page.limit()), (60, 10));
/// ```
pub fn compute(
    total_entries: i64,
    entries_per_page: i64,
    pages_per_block: i64,
    requested_page: i64,
) -> Result<PaginationResult> {
    PaginationInput::new(total_entries, entries_per_page, pages_per_block, requested_page).compute()
}

/// Derive every field from an input that already passed validation.
///
/// Sums that can exceed `i64::MAX` saturate before being capped by a bound
/// that always fits.
pub(crate) fn derive(input: &PaginationInput) -> PaginationResult {
    let PaginationInput {
        total_entries,
        entries_per_page,
        pages_per_block,
        requested_page,
    } = *input;

    let total_pages = (total_entries - 1) / entries_per_page + 1;
    let current_page = requested_page.clamp(1, total_pages);
    if current_page != requested_page {
        debug!(requested_page, current_page, total_pages, "requested page clamped");
    }

    let prev_page = (current_page > 1).then(|| current_page - 1);
    let next_page = (current_page < total_pages).then(|| current_page + 1);

    let block_index = (current_page - 1) / pages_per_block;
    let start_of_block = block_index * pages_per_block + 1;
    let end_of_block = start_of_block
        .saturating_add(pages_per_block - 1)
        .min(total_pages);
    let prev_block_page = (start_of_block > 1).then(|| start_of_block - 1);
    let next_block_page = (end_of_block < total_pages).then(|| end_of_block + 1);

    let start_of_slice = (current_page - 1) * entries_per_page;
    let end_of_slice = start_of_slice
        .saturating_add(entries_per_page - 1)
        .min(total_entries - 1);
    let length_of_slice = end_of_slice - start_of_slice + 1;

    debug!(
        total_entries,
        entries_per_page,
        pages_per_block,
        current_page,
        total_pages,
        "computed pagination"
    );

    PaginationResult {
        total_entries,
        entries_per_page,
        pages_per_block,
        total_pages,
        current_page,
        prev_page,
        next_page,
        start_of_block,
        end_of_block,
        prev_block_page,
        next_block_page,
        start_of_slice,
        end_of_slice,
        length_of_slice,
    }
}
