//! Configuration for pattern compilation
//!
//! Match options are an explicit value threaded through every compile call.
//! Pattern lists with their options can be loaded from TOML.

pub mod ignore_config;
pub mod match_options;

// Re-export commonly used items
pub use ignore_config::IgnoreConfig;
pub use match_options::MatchOptions;
