//! Command implementations.

mod compute;
mod config;

pub use compute::ComputeCommand;
pub use config::ConfigCommand;
