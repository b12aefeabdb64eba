//! CLI command implementations.

mod config;
mod consolidate;

pub use config::run_config;
pub use consolidate::run_consolidate;
