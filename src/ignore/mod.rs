//! Glob-based ignore matching
//!
//! Patterns are compiled once ([`pattern`]), then used to decide whether a
//! single path is ignored ([`matcher`]) and to derive directory patterns a
//! tree walker can prune with ([`dirs`]). [`set::IgnoreSet`] bundles both for
//! a traversal session.

pub mod dirs;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod set;

// Re-export commonly used items
pub use dirs::{dir_ignore_paths, dir_patterns};
pub use matcher::{is_ignored, is_ignored_path, Step};
pub use path::{normalize_file_path, to_posix_path};
pub use pattern::{compile, GlobPattern};
pub use set::IgnoreSet;
