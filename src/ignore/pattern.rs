//! Glob pattern compiler
//!
//! Turns raw ignore strings such as `dist/**` or `!dist/keep.txt` into
//! [`GlobPattern`] values. Compilation is the only fallible step of the
//! whole matching pipeline.

use crate::config::MatchOptions;
use crate::core::error::{PathIgnoreError, Result};
use glob::Pattern;
use tracing::debug;

/// A compiled ignore pattern
#[derive(Debug, Clone)]
pub struct GlobPattern {
    /// The original pattern string, including any leading `!`
    raw: String,
    /// The glob body with negation markers removed
    pattern: String,
    /// Whether the pattern re-includes paths (odd number of leading `!`)
    negate: bool,
    /// Options the matcher was compiled with
    options: MatchOptions,
    /// The compiled glob
    matcher: Pattern,
    /// Number of `.` and `..` segments spelled out in the body
    dot_segments: usize,
}

impl GlobPattern {
    /// Compile a single raw pattern
    pub fn new(raw: &str, options: MatchOptions) -> Result<Self> {
        let (negate, body) = parse_negate(raw);
        let matcher =
            Pattern::new(body).map_err(|e| PathIgnoreError::invalid_pattern(raw, e))?;

        Ok(Self {
            raw: raw.to_string(),
            pattern: body.to_string(),
            negate,
            options,
            matcher,
            dot_segments: count_dot_segments(body),
        })
    }

    /// The original pattern text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The glob body without negation markers
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_negated(&self) -> bool {
        self.negate
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Test a forward-slash path against this pattern.
    ///
    /// For a negated pattern the result is inverted: `true` means the path
    /// lies outside the negation. The matcher folds over this value.
    pub fn matches(&self, path: &str) -> bool {
        let hit = self.body_matches(path);
        if self.negate {
            !hit
        } else {
            hit
        }
    }

    /// Test a path against the glob body, ignoring negation.
    ///
    /// Wildcards never stand in for `.` or `..` segments, even with `dot`
    /// enabled: every such segment in `path` must be a literal segment of
    /// the body. A trailing `/**` also matches the directory itself.
    pub fn body_matches(&self, path: &str) -> bool {
        let options = self.options.to_glob();
        let hit = self.matcher.matches_with(path, options)
            || (self.pattern.ends_with("/**")
                && !path.ends_with('/')
                && self.matcher.matches_with(&format!("{}/", path), options));

        // Each literal dot segment of the body consumes exactly one dot
        // segment of the path, so any surplus was matched by a wildcard.
        hit && count_dot_segments(path) == self.dot_segments
    }

    /// Whether the body starts with `**/` and should see paths with their
    /// `../` prefix stripped
    pub fn strips_parent_prefix(&self) -> bool {
        self.pattern.starts_with("**/")
    }
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.negate == other.negate && self.options == other.options
    }
}

impl Eq for GlobPattern {}

/// Compile an ordered list of raw patterns.
///
/// Fails on the first malformed pattern; nothing is skipped.
pub fn compile<S: AsRef<str>>(raw_patterns: &[S], options: MatchOptions) -> Result<Vec<GlobPattern>> {
    let patterns = raw_patterns
        .iter()
        .map(|raw| GlobPattern::new(raw.as_ref(), options))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        count = patterns.len(),
        negated = patterns.iter().filter(|p| p.is_negated()).count(),
        dot = options.dot,
        "compiled ignore patterns"
    );

    Ok(patterns)
}

/// Count `.` and `..` segments in a forward-slash path or glob
fn count_dot_segments(path: &str) -> usize {
    path.split('/')
        .filter(|segment| matches!(*segment, "." | ".."))
        .count()
}

/// Split leading `!` markers off a raw pattern.
///
/// An even number of markers cancels out.
fn parse_negate(raw: &str) -> (bool, &str) {
    let body = raw.trim_start_matches('!');
    let markers = raw.len() - body.len();
    (markers % 2 == 1, body)
}
