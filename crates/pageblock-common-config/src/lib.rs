//! Configuration types for pageblock.
//!
//! This crate provides the configuration used by pageblock for
//! `.pageblock/config.yaml` files and `PAGEBLOCK_*` environment variables.

pub mod env;
pub mod loader;
pub mod types;

pub use env::*;
pub use loader::*;
pub use types::*;
