//! pathignore - glob ignore matching with directory pruning
//!
//! Decides whether a path is excluded by an ordered list of glob ignore
//! patterns, where a leading `!` re-includes paths an earlier pattern
//! excluded. From the same list it derives directory-level patterns so a
//! tree walker can skip whole subtrees without testing every file.
//!
//! # Core Features
//!
//! - **Ordered negation**: patterns fold left to right; a negation covering
//!   an ignored path rescues it
//! - **Parent-relative paths**: `**/` patterns also match paths reached
//!   through leading `../` segments
//! - **Directory pruning**: `dir/**`, `dir/**/*` and `dir/` patterns reduce
//!   to `dir` unless a negation reaches inside
//! - **Explicit options**: dot-file matching is configured per call, never
//!   globally
//!
//! # Example Usage
//!
//! ```rust
//! use pathignore::{IgnoreSet, MatchOptions};
//!
//! let set = IgnoreSet::new(&["dist/**", "!dist/keep.txt"], MatchOptions::default())?;
//!
//! assert!(set.is_ignored("dist/other.txt"));
//! assert!(!set.is_ignored("dist/keep.txt"));
//! // `dist` cannot be pruned: `dist/keep.txt` must still be visited
//! assert!(!set.is_dir_ignored("dist"));
//! # Ok::<(), pathignore::PathIgnoreError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod ignore;

// Re-export commonly used types
pub use crate::core::error::{PathIgnoreError, Result};

pub use config::{IgnoreConfig, MatchOptions};

pub use ignore::{
    compile, dir_patterns, is_ignored, is_ignored_path, to_posix_path, GlobPattern, IgnoreSet,
};

/// Current version of pathignore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
