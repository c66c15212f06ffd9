//! Pagination arithmetic for paginated listings.
//!
//! From a total entry count, a page size, a block size and a requested page
//! this crate derives everything a listing needs:
//!
//! - page control: total pages, the clamped current page and its neighbours
//! - block control: the window of page links around the current page
//! - slice params: the zero-based entry range, usable as `OFFSET`/`LIMIT`

#![warn(missing_docs)]

pub mod compute;
pub mod error;
pub mod paginator;
pub mod result;

// Re-exports
pub use compute::{compute, PaginationInput};
pub use error::{PaginationError, Result};
pub use paginator::Paginator;
pub use result::PaginationResult;
