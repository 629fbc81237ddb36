//! Directory-level pattern derivation
//!
//! Reduces a compiled pattern list to the directories it excludes wholesale,
//! so a tree walker can skip them without testing every file inside. A
//! directory is only kept when no negated pattern reaches into it.

use crate::config::MatchOptions;
use crate::core::error::Result;
use crate::ignore::path::is_sub_directory;
use crate::ignore::pattern::{compile, GlobPattern};
use tracing::debug;

/// Suffixes that make a pattern cover an entire directory, in priority order
const DIRECTORY_SUFFIXES: [&str; 3] = ["/**/*", "/**", "/"];

/// Strip a directory-denoting suffix from a positive pattern body.
///
/// Returns `None` for patterns that match individual files only.
pub fn directory_of(pattern: &str) -> Option<&str> {
    DIRECTORY_SUFFIXES
        .iter()
        .find_map(|suffix| pattern.strip_suffix(suffix))
}

/// Derive the raw directory patterns without compiling them
pub fn dir_ignore_paths(patterns: &[GlobPattern]) -> Vec<String> {
    let (negated, positive): (Vec<&GlobPattern>, Vec<&GlobPattern>) =
        patterns.iter().partition(|p| p.is_negated());

    let mut dirs: Vec<String> = positive
        .iter()
        .filter_map(|p| directory_of(p.pattern()))
        .map(str::to_string)
        .collect();

    for pattern in negated {
        let before = dirs.len();
        dirs.retain(|dir| !is_sub_directory(dir, pattern.pattern()));
        if dirs.len() != before {
            debug!(
                negation = pattern.raw(),
                removed = before - dirs.len(),
                "negated pattern reaches into ignored directories"
            );
        }
    }

    dirs
}

/// Build directory ignore patterns from prebuilt path patterns.
///
/// The result holds only positive patterns, compiled with `options`.
pub fn dir_patterns(patterns: &[GlobPattern], options: MatchOptions) -> Result<Vec<GlobPattern>> {
    compile(&dir_ignore_paths(patterns), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn raw_dirs(raw: &[&str]) -> Vec<String> {
        let patterns = compile(raw, MatchOptions::default()).unwrap();
        dir_ignore_paths(&patterns)
    }

    #[rstest]
    #[case("build/**/*", Some("build"))]
    #[case("build/**", Some("build"))]
    #[case("build/", Some("build"))]
    #[case("**/node_modules/**", Some("**/node_modules"))]
    #[case("a/**/*/**/*", Some("a/**/*"))]
    #[case("*.log", None)]
    #[case("build/*", None)]
    #[case("build", None)]
    fn test_directory_of(#[case] pattern: &str, #[case] expected: Option<&str>) {
        assert_eq!(directory_of(pattern), expected);
    }

    #[test]
    fn test_single_directory() {
        assert_eq!(raw_dirs(&["build/**/*"]), vec!["build".to_string()]);
    }

    #[test]
    fn test_negation_inside_directory_removes_it() {
        assert!(raw_dirs(&["build/**/*", "!build/keep/file.txt"]).is_empty());
    }

    #[test]
    fn test_every_duplicate_is_removed() {
        let dirs = raw_dirs(&["build/**", "build/", "dist/**", "build/**/*", "!build/keep"]);
        assert_eq!(dirs, vec!["dist".to_string()]);
    }

    #[test]
    fn test_negation_outside_directory_keeps_it() {
        let dirs = raw_dirs(&["build/**", "!src/keep.txt", "ios/Pods/"]);
        assert_eq!(dirs, vec!["build".to_string(), "ios/Pods".to_string()]);
    }

    #[test]
    fn test_negation_of_parent_removes_child_directory_only_when_contained() {
        // `!ios` does not reach inside `ios/Pods`; the directory stays.
        let dirs = raw_dirs(&["ios/Pods/**", "!ios"]);
        assert_eq!(dirs, vec!["ios/Pods".to_string()]);
    }

    #[test]
    fn test_dir_patterns_are_positive_and_match_directories() {
        let patterns = compile(&["build/**/*", "**/node_modules/**", "!src/x"], MatchOptions::default()).unwrap();
        let dirs = dir_patterns(&patterns, MatchOptions::default()).unwrap();

        assert_eq!(dirs.len(), 2);
        assert!(dirs.iter().all(|d| !d.is_negated()));
        assert!(dirs[0].matches("build"));
        assert!(dirs[1].matches("packages/app/node_modules"));
        assert!(!dirs[1].matches("packages/app/src"));
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let raw = ["build/**/*", "!build/keep/file.txt", "dist/**", "*.log"];
        let first = dir_patterns(&compile(&raw, MatchOptions::default()).unwrap(), MatchOptions::default()).unwrap();
        let second = dir_patterns(&compile(&raw, MatchOptions::default()).unwrap(), MatchOptions::default()).unwrap();
        assert_eq!(first, second);
    }
}
