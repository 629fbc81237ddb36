//! Prebuilt ignore set for one traversal session
//!
//! Holds the compiled path patterns together with the directory patterns
//! derived from them. Built once, then shared read-only (including across
//! threads) while a walker tests paths.

use crate::config::MatchOptions;
use crate::core::error::Result;
use crate::ignore::dirs::dir_patterns;
use crate::ignore::matcher::is_ignored;
use crate::ignore::path::to_posix_path;
use crate::ignore::pattern::{compile, GlobPattern};
use rayon::prelude::*;

/// Compiled path and directory patterns sharing one set of options
#[derive(Debug, Clone, PartialEq)]
pub struct IgnoreSet {
    options: MatchOptions,
    path_patterns: Vec<GlobPattern>,
    dir_patterns: Vec<GlobPattern>,
}

impl IgnoreSet {
    /// Compile `raw_patterns` and derive directory patterns from them
    pub fn new<S: AsRef<str>>(raw_patterns: &[S], options: MatchOptions) -> Result<Self> {
        let path_patterns = compile(raw_patterns, options)?;
        Self::from_patterns(path_patterns, options)
    }

    /// Build from patterns that are already compiled
    pub fn from_patterns(path_patterns: Vec<GlobPattern>, options: MatchOptions) -> Result<Self> {
        let dir_patterns = dir_patterns(&path_patterns, options)?;
        Ok(Self {
            options,
            path_patterns,
            dir_patterns,
        })
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn path_patterns(&self) -> &[GlobPattern] {
        &self.path_patterns
    }

    pub fn dir_patterns(&self) -> &[GlobPattern] {
        &self.dir_patterns
    }

    /// Whether the file at `file_path` is ignored.
    ///
    /// Platform separators are converted before matching.
    pub fn is_ignored(&self, file_path: &str) -> bool {
        is_ignored(&to_posix_path(file_path), &self.path_patterns)
    }

    /// Whether the whole directory at `dir_path` can be skipped.
    ///
    /// `false` only means the directory cannot be pruned wholesale; files
    /// inside still need [`IgnoreSet::is_ignored`].
    pub fn is_dir_ignored(&self, dir_path: &str) -> bool {
        is_ignored(&to_posix_path(dir_path), &self.dir_patterns)
    }

    /// Split `paths` into `(kept, ignored)`, evaluating in parallel.
    ///
    /// Both halves keep the input order.
    pub fn partition<S>(&self, paths: &[S]) -> (Vec<String>, Vec<String>)
    where
        S: AsRef<str> + Sync,
    {
        let verdicts: Vec<bool> = paths
            .par_iter()
            .map(|path| self.is_ignored(path.as_ref()))
            .collect();

        let mut kept = Vec::new();
        let mut ignored = Vec::new();
        for (path, verdict) in paths.iter().zip(verdicts) {
            if verdict {
                ignored.push(path.as_ref().to_string());
            } else {
                kept.push(path.as_ref().to_string());
            }
        }
        (kept, ignored)
    }
}
