//! Path matcher
//!
//! Applies compiled patterns left to right with negation semantics. The
//! verdict is a fold with a single boolean of state and one early exit; it
//! is not "any positive matches and no negative matches".

use crate::config::MatchOptions;
use crate::core::error::Result;
use crate::ignore::path::normalize_file_path;
use crate::ignore::pattern::{compile, GlobPattern};
use tracing::trace;

/// Outcome of folding one pattern into the running verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep folding with this verdict
    Continue(bool),
    /// Stop folding; this is the final verdict
    Stop(bool),
}

/// Fold a single pattern into the running verdict for `file_path`
pub fn step(ignored: bool, pattern: &GlobPattern, file_path: &str) -> Step {
    let normalized = normalize_file_path(file_path, pattern.strips_parent_prefix());
    let current = pattern.matches(normalized);

    if pattern.is_negated() {
        // An earlier positive pattern ignored the path and this negation
        // covers it.
        if ignored && !current {
            return Step::Stop(false);
        }
        Step::Continue(ignored)
    } else {
        Step::Continue(ignored || current)
    }
}

/// Indicate whether `file_path` is excluded by the prebuilt `patterns`.
///
/// `file_path` must use forward slashes; see
/// [`to_posix_path`](crate::ignore::path::to_posix_path).
pub fn is_ignored(file_path: &str, patterns: &[GlobPattern]) -> bool {
    let mut ignored = false;
    for pattern in patterns {
        match step(ignored, pattern, file_path) {
            Step::Continue(next) => ignored = next,
            Step::Stop(verdict) => {
                trace!(path = file_path, pattern = pattern.raw(), verdict, "negation stopped fold");
                return verdict;
            }
        }
    }
    trace!(path = file_path, verdict = ignored, "ignore verdict");
    ignored
}

/// Compile `raw_patterns` and test a single path against them.
///
/// Prefer [`compile`] once plus [`is_ignored`] per path when testing many
/// paths.
pub fn is_ignored_path<S: AsRef<str>>(
    file_path: &str,
    raw_patterns: &[S],
    options: MatchOptions,
) -> Result<bool> {
    let patterns = compile(raw_patterns, options)?;
    Ok(is_ignored(file_path, &patterns))
}
