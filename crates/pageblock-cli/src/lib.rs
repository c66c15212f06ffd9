//! pageblock CLI library
//!
//! Argument parsing, commands and output formatting for the `pageblock` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
