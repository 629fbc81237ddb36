//! Core types shared by the pattern compiler, matcher and configuration layer

pub mod error;

// Re-export commonly used items
pub use error::{PathIgnoreError, Result};
